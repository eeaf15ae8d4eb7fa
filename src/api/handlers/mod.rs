pub mod health;
pub mod invitee;
pub mod spreadsheet;
pub mod template;
