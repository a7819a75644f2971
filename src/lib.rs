pub mod modules {
    pub mod attendance {
        pub mod core {
            pub mod calendar;
            pub mod record;
            pub mod time_of_day;
        }
        pub mod use_cases {
            pub mod import_attendance {
                pub mod date_cell;
                pub mod extract;
                pub mod handler;
                pub mod raw_row;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod monthly_summary {
                pub mod handler;
                pub mod queries_port;
                pub mod summarize;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod csv_rows;
            }
            pub mod outbound {
                pub mod attendance_in_memory;
                pub mod repository;
            }
        }
    }
}

pub mod shell;
