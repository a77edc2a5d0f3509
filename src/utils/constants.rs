use dotenvy::dotenv;
use lazy_static::lazy_static;
use std::env as std_env;

use crate::domain::DEFAULT_DEADLINE_DAY;

lazy_static! {
    pub static ref APP_ADDRESS: String =
        load_or_default(env::APP_ADDRESS_ENV_VAR, prod::APP_ADDRESS);
    pub static ref SUBMISSION_DEADLINE_DAY: u32 = set_deadline_day();
}

fn load_env() {
    dotenv().ok();
}

fn set_deadline_day() -> u32 {
    let day = load_or_default(
        env::SUBMISSION_DEADLINE_DAY_ENV_VAR,
        &DEFAULT_DEADLINE_DAY.to_string(),
    );
    day.trim()
        .parse()
        .expect("SUBMISSION_DEADLINE_DAY must be a day of the month")
}

fn load_or_default(variable_name: &str, default_value: &str) -> String {
    load_env();

    match std_env::var(variable_name) {
        Ok(value) if !value.is_empty() => value,
        _ => String::from(default_value),
    }
}

pub mod env {
    pub const APP_ADDRESS_ENV_VAR: &str = "APP_ADDRESS";
    pub const SUBMISSION_DEADLINE_DAY_ENV_VAR: &str = "SUBMISSION_DEADLINE_DAY";
}

pub const SESSION_COOKIE_NAME: &str = "session";
pub const ROLE_HEADER_NAME: &str = "x-shift-role";

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
