pub mod viewing_logs;
