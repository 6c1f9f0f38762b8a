//! 学生存储操作

use super::SeaOrmStorage;
use crate::entity::students::{ActiveModel, Column, Entity as Students, Relation};
use crate::errors::{Result, RosterSystemError};
use crate::models::students::{entities::Student, requests::CreateStudentRequest};
use crate::utils::validate::validate_person_name;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, Set,
};

impl SeaOrmStorage {
    /// 创建学生（仅种子数据路径，创建时校验）
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        validate_person_name(&req.name).map_err(RosterSystemError::validation)?;
        if req.age <= 0 {
            return Err(RosterSystemError::validation("学生年龄必须为正数"));
        }

        // 学生必须挂在已存在的课程名下
        if self.get_course_by_id_impl(req.course_id).await?.is_none() {
            return Err(RosterSystemError::not_found(format!(
                "课程 {} 不存在，无法创建学生",
                req.course_id
            )));
        }

        let now = chrono::Utc::now().timestamp();
        let model = ActiveModel {
            course_id: Set(req.course_id),
            name: Set(req.name),
            grade: Set(req.grade),
            age: Set(req.age),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| RosterSystemError::database_operation(format!("创建学生失败: {e}")))?;

        Ok(result.into_student())
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RosterSystemError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 列出某课程的全部学生
    ///
    /// 规范顺序为 id 升序；sort_by_name 为 true 时按 (name, id) 排序，
    /// 同名学生之间保持确定的相对顺序。
    pub async fn list_students_by_course_impl(
        &self,
        course_id: i64,
        sort_by_name: bool,
    ) -> Result<Vec<Student>> {
        let mut select = Students::find().filter(Column::CourseId.eq(course_id));

        select = if sort_by_name {
            select.order_by_asc(Column::Name).order_by_asc(Column::Id)
        } else {
            select.order_by_asc(Column::Id)
        };

        let students = select
            .all(&self.db)
            .await
            .map_err(|e| RosterSystemError::database_operation(format!("查询课程学生失败: {e}")))?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }

    /// 列出某教师名下全部课程的学生
    ///
    /// 教师与学生之间没有直接外键，通过课程表做一次 INNER JOIN。
    pub async fn list_students_by_teacher_impl(&self, teacher_id: i64) -> Result<Vec<Student>> {
        let students = Students::find()
            .join(JoinType::InnerJoin, Relation::Course.def())
            .filter(crate::entity::courses::Column::TeacherId.eq(teacher_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| RosterSystemError::database_operation(format!("查询教师学生失败: {e}")))?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }
}
