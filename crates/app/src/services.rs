//! Use-case services — driving ports of the application.

pub mod student_service;
