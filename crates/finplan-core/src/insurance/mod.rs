pub mod hlv;
