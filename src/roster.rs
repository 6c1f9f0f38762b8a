//! 花名册衍生操作
//!
//! 在已加载的学生集合上执行的纯函数：随机分组、最高分学生、成绩序列。
//! 随机源由调用方显式传入，生产环境使用 `rand::rng()`，测试注入带种子的
//! `StdRng`，避免依赖隐藏的全局状态。

use rand::Rng;
use rand::seq::SliceRandom;
use std::cmp::Reverse;

use crate::models::students::entities::Student;

/// 随机两人分组
///
/// 对学生集合做一次均匀随机洗牌，再按顺序每两人切为一组；
/// 人数为奇数时最后一组只有一人。空集合返回空结果。
pub fn generate_pairs<R: Rng + ?Sized>(
    mut students: Vec<Student>,
    rng: &mut R,
) -> Vec<Vec<Student>> {
    students.shuffle(rng);
    students.chunks(2).map(<[Student]>::to_vec).collect()
}

/// 最高分学生
///
/// 同分时取 id 最小者，保证跨后端结果确定。空集合返回 None。
pub fn top_student(students: &[Student]) -> Option<&Student> {
    students.iter().max_by_key(|s| (s.grade, Reverse(s.id)))
}

/// 成绩序列，顺序与传入的学生集合一致，不做排序
pub fn grades(students: &[Student]) -> Vec<i32> {
    students.iter().map(|s| s.grade).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::BTreeSet;

    fn student(id: i64, grade: i32) -> Student {
        Student {
            id,
            course_id: 1,
            name: format!("Student {id}"),
            grade,
            age: 18,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn roster(n: i64) -> Vec<Student> {
        (1..=n).map(|id| student(id, 60 + (id % 40) as i32)).collect()
    }

    #[test]
    fn test_generate_pairs_partitions_everyone_exactly_once() {
        for n in [2, 3, 4, 5, 10, 11, 31] {
            for seed in [1u64, 7, 42] {
                let mut rng = StdRng::seed_from_u64(seed);
                let pairs = generate_pairs(roster(n), &mut rng);

                // ⌈N/2⌉ 组
                assert_eq!(pairs.len() as i64, (n + 1) / 2);

                // 除最后一组外都是两人；最后一组仅在奇数时为一人
                for (i, group) in pairs.iter().enumerate() {
                    if i + 1 < pairs.len() {
                        assert_eq!(group.len(), 2);
                    } else if n % 2 == 0 {
                        assert_eq!(group.len(), 2);
                    } else {
                        assert_eq!(group.len(), 1);
                    }
                }

                // 每个学生恰好出现一次
                let ids: Vec<i64> = pairs.iter().flatten().map(|s| s.id).collect();
                assert_eq!(ids.len() as i64, n);
                let unique: BTreeSet<i64> = ids.iter().copied().collect();
                assert_eq!(unique, (1..=n).collect::<BTreeSet<i64>>());
            }
        }
    }

    #[test]
    fn test_generate_pairs_empty_roster() {
        let mut rng = StdRng::seed_from_u64(0);
        let pairs = generate_pairs(Vec::new(), &mut rng);
        assert!(pairs.is_empty());
    }

    #[test]
    fn test_generate_pairs_single_student() {
        let mut rng = StdRng::seed_from_u64(0);
        let pairs = generate_pairs(vec![student(9, 77)], &mut rng);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].len(), 1);
        assert_eq!(pairs[0][0].id, 9);
    }

    #[test]
    fn test_generate_pairs_shuffles_between_seeds() {
        // 不同种子应当能给出不同排列（37 人的排列空间足够大）
        let order = |seed: u64| -> Vec<i64> {
            let mut rng = StdRng::seed_from_u64(seed);
            generate_pairs(roster(37), &mut rng)
                .into_iter()
                .flatten()
                .map(|s| s.id)
                .collect()
        };
        assert_ne!(order(1), order(2));
    }

    #[test]
    fn test_top_student_picks_max_grade() {
        let students = vec![student(1, 70), student(2, 95), student(3, 60)];
        let top = top_student(&students).expect("roster is not empty");
        assert_eq!(top.id, 2);
        assert_eq!(top.grade, 95);
    }

    #[test]
    fn test_top_student_tie_breaks_on_lowest_id() {
        // 成绩 [70, 95, 95, 60]，两位 95 分取 id 较小者
        let students = vec![
            student(10, 70),
            student(11, 95),
            student(12, 95),
            student(13, 60),
        ];
        let top = top_student(&students).expect("roster is not empty");
        assert_eq!(top.grade, 95);
        assert_eq!(top.id, 11);

        // 与集合顺序无关
        let mut reversed = students;
        reversed.reverse();
        assert_eq!(top_student(&reversed).unwrap().id, 11);
    }

    #[test]
    fn test_top_student_empty_roster() {
        assert!(top_student(&[]).is_none());
    }

    #[test]
    fn test_grades_preserves_collection_order() {
        let students = vec![student(3, 81), student(1, 64), student(2, 99)];
        assert_eq!(grades(&students), vec![81, 64, 99]);
    }

    #[test]
    fn test_grades_empty_roster() {
        assert!(grades(&[]).is_empty());
    }
}
