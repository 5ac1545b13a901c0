pub mod token;

pub mod dtos {
    pub mod reset;
}
pub mod routes {
    pub mod reset;
}
pub mod services {
    pub mod mailer;
    pub mod reset;
}

pub use routes::reset::mount_reset;
