pub mod import;
pub mod invitee;
pub mod template;
