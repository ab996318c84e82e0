use chrono::NaiveDate;
use mockall::mock;

use crate::models::{DbTeacher, DbTimetable, DbUser};

// Mock repositories for testing
mock! {
    pub UserRepo {
        pub async fn find_user_by_email_and_role(
            &self,
            email: &'static str,
            role: &'static str,
        ) -> eyre::Result<Option<DbUser>>;

        pub async fn find_student_by_usn(
            &self,
            usn: &'static str,
        ) -> eyre::Result<Option<DbUser>>;

        pub async fn find_students_by_division(
            &self,
            division: &'static str,
        ) -> eyre::Result<Vec<DbUser>>;

        pub async fn create_student(
            &self,
            name: &'static str,
            usn: &'static str,
            dob: Option<NaiveDate>,
            division: &'static str,
        ) -> eyre::Result<DbUser>;
    }
}

mock! {
    pub TeacherRepo {
        pub async fn find_teacher_by_teacher_id(
            &self,
            teacher_id: &'static str,
        ) -> eyre::Result<Option<DbTeacher>>;
    }
}

mock! {
    pub TimetableRepo {
        pub async fn get_timetable(
            &self,
            department: &'static str,
            semester: &'static str,
        ) -> eyre::Result<Option<DbTimetable>>;

        pub async fn list_departments(&self) -> eyre::Result<Vec<String>>;

        pub async fn list_semesters(&self) -> eyre::Result<Vec<String>>;
    }
}
