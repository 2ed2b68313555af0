pub mod agenda;
pub mod days;
pub mod export;
pub mod fav;
pub mod gate;
pub mod init;
pub mod speakers;
