pub mod amortization;
pub mod emi;
