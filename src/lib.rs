pub mod shared {
    pub mod http {
        pub mod envelope;
    }
}

pub mod modules {
    pub mod items {
        pub mod core {
            pub mod changes;
            pub mod decide;
            pub mod item;
            pub mod quantity;
        }
        pub mod application {
            pub mod errors;
            pub mod item_store;
        }
        pub mod use_cases {
            pub mod list_items {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_item {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_item {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_item {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_item {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http_errors;
            }
            pub mod outbound {
                pub mod item_repository;
                pub mod item_repository_in_memory;
            }
        }
    }
}

pub mod shell;
