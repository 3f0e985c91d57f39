//! Built-in demo dataset

use chrono::NaiveDate;
use shared::models::{Role, User};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid demo date")
}

/// The five-person pool the console seeds when it runs without a
/// backing service. Ids are small fixed numbers so demos and docs can
/// reference them; records created at runtime get generated ids.
pub fn demo_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "Ahmed Mohamed".to_string(),
            role: Role::Admin,
            department: "IT".to_string(),
            position: "Technical Manager".to_string(),
            email: "ahmed@company.com".to_string(),
            join_date: date(2023, 1, 15),
        },
        User {
            id: 2,
            name: "Fatima Ahmed".to_string(),
            role: Role::Manager,
            department: "HR".to_string(),
            position: "HR Manager".to_string(),
            email: "fatima@company.com".to_string(),
            join_date: date(2023, 2, 20),
        },
        User {
            id: 3,
            name: "Mohamed Ali".to_string(),
            role: Role::Employee,
            department: "Sales".to_string(),
            position: "Sales Representative".to_string(),
            email: "mohamed@company.com".to_string(),
            join_date: date(2023, 3, 10),
        },
        User {
            id: 4,
            name: "Sara Khaled".to_string(),
            role: Role::Employee,
            department: "Marketing".to_string(),
            position: "Digital Marketer".to_string(),
            email: "sara@company.com".to_string(),
            join_date: date(2023, 4, 5),
        },
        User {
            id: 5,
            name: "Abdullah Hassan".to_string(),
            role: Role::Manager,
            department: "Finance".to_string(),
            position: "Finance Manager".to_string(),
            email: "abdullah@company.com".to_string(),
            join_date: date(2023, 5, 12),
        },
    ]
}
