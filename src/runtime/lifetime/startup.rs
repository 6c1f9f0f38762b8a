use crate::config::AppConfig;
use crate::models::courses::requests::CreateCourseRequest;
use crate::models::students::requests::CreateStudentRequest;
use crate::models::teachers::requests::CreateTeacherRequest;
use crate::storage::Storage;
use chrono::{Duration, Utc};
use rand::Rng;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

// 示例数据目录：教师、照片与课程名
const SEED_CATALOG: &[(&str, &str, &[&str])] = &[
    (
        "Ari",
        "https://photos.rostersystem.dev/ari.png",
        &[
            "Snack Science 101",
            "Dancing 201",
            "Quiet Confidence 301",
        ],
    ),
    (
        "Bell",
        "https://photos.rostersystem.dev/bell.png",
        &["Lego Engineering 101", "Ice Skating"],
    ),
    (
        "Dom",
        "https://photos.rostersystem.dev/dom.png",
        &[
            "DOM 101: Intro to the Document Object Model",
            "DOM 102: Being More Than Just an Object",
        ],
    ),
];

const FIRST_NAMES: &[&str] = &[
    "Alex", "Bailey", "Casey", "Devon", "Elliot", "Frankie", "Harper", "Indigo", "Jordan", "Kai",
    "Logan", "Morgan", "Noel", "Parker", "Quinn", "Riley", "Sage", "Taylor",
];

const LAST_NAMES: &[&str] = &[
    "Adams", "Baker", "Chen", "Diaz", "Evans", "Fischer", "Garcia", "Huang", "Ito", "Jones",
    "Khan", "Lee", "Martin", "Nguyen", "Okafor", "Park",
];

/// 生成随机学生姓名
fn random_student_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.random_range(0..LAST_NAMES.len())];
    format!("{first} {last}")
}

/// 初始化示例数据
/// 如果数据库中没有任何教师，则写入一套示例教师/课程/学生
async fn seed_sample_data(storage: &Arc<dyn Storage>) {
    let config = AppConfig::get();
    if !config.seed.enabled {
        debug!("Sample data seeding is disabled, skipping");
        return;
    }

    // 检查是否已有数据
    match storage.count_teachers().await {
        Ok(count) if count > 0 => {
            debug!("Database already has {} teacher(s), skipping seed", count);
            return;
        }
        Ok(_) => {
            info!("No teachers found in database, seeding sample data...");
        }
        Err(e) => {
            warn!("Failed to count teachers: {}, skipping seed", e);
            return;
        }
    }

    let mut rng = rand::rng();
    let mut course_total = 0u32;
    let mut student_total = 0u32;

    for (teacher_name, photo_url, course_names) in SEED_CATALOG {
        let teacher = match storage
            .create_teacher(CreateTeacherRequest {
                name: (*teacher_name).to_string(),
                photo_url: Some((*photo_url).to_string()),
            })
            .await
        {
            Ok(teacher) => teacher,
            Err(e) => {
                warn!("Failed to seed teacher {}: {}", teacher_name, e);
                return;
            }
        };

        for course_name in *course_names {
            // 开课窗口落在当前时间前后
            let start_date = Utc::now() - Duration::days(rng.random_range(1..30));
            let end_date = Utc::now() + Duration::days(rng.random_range(2..60));

            let course = match storage
                .create_course(CreateCourseRequest {
                    teacher_id: teacher.id,
                    name: (*course_name).to_string(),
                    start_date,
                    end_date,
                })
                .await
            {
                Ok(course) => course,
                Err(e) => {
                    warn!("Failed to seed course {}: {}", course_name, e);
                    return;
                }
            };
            course_total += 1;

            for _ in 0..config.seed.students_per_course {
                let student = CreateStudentRequest {
                    course_id: course.id,
                    name: random_student_name(&mut rng),
                    grade: 50 + rng.random_range(0..50),
                    age: 15 + rng.random_range(0..40),
                };

                if let Err(e) = storage.create_student(student).await {
                    warn!("Failed to seed student for course {}: {}", course.id, e);
                    return;
                }
                student_total += 1;
            }
        }
    }

    info!(
        "Sample data seeded: {} teachers, {} courses, {} students",
        SEED_CATALOG.len(),
        course_total,
        student_total
    );
}

/// 准备服务器启动的上下文
/// 包括存储初始化与示例数据
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    // 初始化示例数据（如果需要）
    seed_sample_data(&storage).await;

    StartupContext { storage }
}
