pub mod courses;
pub mod students;
pub mod teachers;

pub use courses::CourseService;
pub use students::StudentService;
pub use teachers::TeacherService;
