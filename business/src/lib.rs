pub mod application {
    pub mod bookmark {
        pub mod get_all;
        pub mod is_bookmarked;
        pub mod toggle;
    }
    pub mod recipe {
        pub mod get_by_id;
        pub mod list;
    }
    pub mod review {
        pub mod delete;
        pub mod get_by_recipe;
        pub mod submit;
    }
    pub mod suggestion {
        pub mod suggest;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod bookmark {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
            pub mod is_bookmarked;
            pub mod toggle;
        }
    }
    pub mod recipe {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_by_id;
            pub mod list;
        }
    }
    pub mod review {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod delete;
            pub mod get_by_recipe;
            pub mod submit;
        }
    }
    pub mod suggestion {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod suggest;
        }
    }
}
