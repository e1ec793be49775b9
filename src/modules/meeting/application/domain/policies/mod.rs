pub mod schedule_policy;
