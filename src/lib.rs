pub mod shared {
    pub mod core {
        pub mod clock;
    }
    pub mod infrastructure {
        pub mod store;
    }
}

pub mod modules {
    pub mod completions {
        pub mod core {
            pub mod aggregate;
            pub mod completion_event;
            pub mod daily_count;
            pub mod ports;
            pub mod seed;
            pub mod window;
        }
        pub mod use_cases {
            pub mod list_daily_completions {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod record_completion {
                pub mod handler;
            }
            pub mod summarize_completions {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod completion_log_store;
            }
        }
    }

    pub mod projects {
        pub mod core {
            pub mod project;
        }
        pub mod use_cases {
            pub mod manage_projects {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
    }

    pub mod tasks {
        pub mod core {
            pub mod task;
        }
        pub mod use_cases {
            pub mod manage_tasks {
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
