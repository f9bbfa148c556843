pub mod application {
    pub mod category {
        pub mod get_all;
    }
    pub mod product {
        pub mod calculate_expiry;
        pub mod calculate_withdrawal;
        pub mod cleanup;
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod get_stats;
        pub mod update;
    }
    pub mod user {
        pub mod ensure_admin;
        pub mod login;
        pub mod register;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod dates;
        pub mod plural;
        pub mod value_objects;
    }
    pub mod category {
        pub mod errors;
        pub mod model;
        pub mod registry;
        pub mod use_cases {
            pub mod get_all;
        }
    }
    pub mod product {
        pub mod calculator;
        pub mod errors;
        pub mod filter;
        pub mod model;
        pub mod repository;
        pub mod urgency;
        pub mod value_objects;
        pub mod use_cases {
            pub mod calculate_expiry;
            pub mod calculate_withdrawal;
            pub mod cleanup;
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod get_stats;
            pub mod update;
        }
    }
    pub mod user {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod ensure_admin;
            pub mod login;
            pub mod register;
        }
    }
}

#[cfg(test)]
mod test_support;
