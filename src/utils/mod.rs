// Utils compartidos

pub mod messages;
