pub mod application {
    pub mod capture {
        pub mod extract_price;
        pub mod scan_price;
    }
    pub mod pricing {
        pub mod compute;
    }
}

pub mod domain {
    pub mod logger;
    pub mod calculator {
        pub mod model;
    }
    pub mod capture {
        pub mod errors;
        pub mod model;
        pub mod price_parser;
        pub mod services;
        pub mod session;
        pub mod use_cases {
            pub mod extract_price;
            pub mod scan_price;
        }
    }
    pub mod pricing {
        pub mod engine;
        pub mod errors;
        pub mod format;
        pub mod model;
        pub mod use_cases {
            pub mod compute;
        }
    }
}
