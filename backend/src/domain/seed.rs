//! Sample records used to bootstrap an empty store.

use super::user::{User, UserId, UserProfile};

fn sample(id: u64, name: &str, email: &str, age: u8, phone: &str, city: &str) -> User {
    User::new(
        UserId::new(id),
        UserProfile {
            name: name.to_owned(),
            email: email.to_owned(),
            age,
            phone: phone.to_owned(),
            city: city.to_owned(),
        },
    )
}

/// The three users written when no document exists yet.
#[must_use]
pub fn sample_users() -> Vec<User> {
    vec![
        sample(
            1,
            "Иван Иванов",
            "ivan@example.com",
            25,
            "+7 (999) 123-45-67",
            "Москва",
        ),
        sample(
            2,
            "Мария Петрова",
            "maria@example.com",
            30,
            "+7 (999) 234-56-78",
            "Санкт-Петербург",
        ),
        sample(
            3,
            "Алексей Сидоров",
            "alex@example.com",
            22,
            "+7 (999) 345-67-89",
            "Казань",
        ),
    ]
}
