pub mod shared {
    pub mod http {
        pub mod params;
        pub mod responses;
    }
    pub mod infrastructure {
        pub mod activity_store;
    }
}

pub mod modules {
    pub mod activities {
        pub mod core {
            pub mod activity;
            pub mod errors;
            pub mod seed;
        }
        pub mod use_cases {
            pub mod application_error;
            pub mod list_activities {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod sign_up_for_activity {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod unregister_from_activity {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
