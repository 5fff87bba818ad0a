pub mod error;
pub mod security;
pub mod tags;

pub mod health {
    pub mod routes;
}
pub mod recipe {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod review {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod bookmark {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod suggestion {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
