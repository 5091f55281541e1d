mod affordability;
mod common;
mod eligibility;
