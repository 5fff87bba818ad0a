pub mod db;
pub mod recipe {
    pub mod entity;
    pub mod repository;
}
pub mod review {
    pub mod entity;
    pub mod repository;
}
pub mod bookmark {
    pub mod entity;
    pub mod repository;
}
