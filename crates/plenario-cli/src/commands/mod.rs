pub mod agenda;
pub mod agent;
pub mod audit;
pub mod board;
pub mod committee;
pub mod councilor;
pub mod dispatch;
pub mod document;
pub mod draft;
pub mod init;
pub mod minutes;
pub mod opinion;
pub mod overview;
pub mod schema;
pub mod session;
pub mod shared;
pub mod user;
