pub mod courses;

pub mod students;

pub mod teachers;

pub use courses::configure_courses_routes;
pub use students::configure_students_routes;
pub use teachers::configure_teachers_routes;
