pub mod application {
    pub mod scan {
        pub mod resolve_barcode;
        pub mod scan_product;
    }
}

pub mod domain {
    pub mod logger;
    pub mod scan {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod value_objects;
        pub mod use_cases {
            pub mod resolve_barcode;
            pub mod scan_product;
        }
    }
}
