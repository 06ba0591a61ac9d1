pub mod audit;
pub mod init_map;
pub mod render;
