use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;

use loan_scout::catalog::{
    CatalogImporter, CatalogSnapshot, HomeOwnership, InterestRateRange, LoanKind, LoanProduct,
    ProductId, Qualification, RateType,
};
use loan_scout::config::AppConfig;
use loan_scout::error::AppError;
use loan_scout::recommendation::{
    BorrowerProfile, BorrowerSegment, EmploymentType, RecommendationEngine, RecommendationResult,
    ShortfallReason,
};
use loan_scout::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "loan-scout",
    about = "Rank bank loan offers against a borrower credit profile",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Recommend and rank loan products for a borrower profile
    Recommend(RecommendArgs),
    /// Inspect a catalog snapshot without running the engine
    Catalog(CatalogArgs),
}

#[derive(Args, Debug, Default)]
struct RecommendArgs {
    /// Borrower profile JSON (defaults to the built-in demo borrower)
    #[arg(long)]
    profile: Option<PathBuf>,
    /// Product catalog CSV export (defaults to the built-in demo catalog)
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Snapshot capture date (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    captured_at: Option<NaiveDate>,
    /// Limit output to the best N products
    #[arg(long)]
    top: Option<usize>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Args, Debug, Default)]
struct CatalogArgs {
    /// Product catalog CSV export (defaults to the built-in demo catalog)
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Snapshot capture date (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    captured_at: Option<NaiveDate>,
    /// Only list products sold by this bank
    #[arg(long)]
    bank: Option<String>,
    /// Only list products of one loan kind
    #[arg(long, value_enum)]
    kind: Option<KindFilter>,
    /// Only list products carrying the youth-preference flag
    #[arg(long)]
    youth: bool,
    /// Only list products accepting fully mobile applications
    #[arg(long)]
    mobile: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum KindFilter {
    Mortgage,
    LeaseDeposit,
}

impl From<KindFilter> for LoanKind {
    fn from(value: KindFilter) -> Self {
        match value {
            KindFilter::Mortgage => LoanKind::Mortgage,
            KindFilter::LeaseDeposit => LoanKind::LeaseDeposit,
        }
    }
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let config = AppConfig::load();
    telemetry::init(&config.telemetry)?;

    let cli = Cli::parse();
    match cli.command {
        Command::Recommend(args) => run_recommend(args, &config),
        Command::Catalog(args) => run_catalog(args),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

fn run_recommend(args: RecommendArgs, config: &AppConfig) -> Result<(), AppError> {
    let RecommendArgs {
        profile,
        catalog,
        captured_at,
        top,
        format,
    } = args;

    let rubric = config.load_rubric()?.unwrap_or_default();
    let engine = RecommendationEngine::new(rubric);

    let captured_at = captured_at.unwrap_or_else(|| Local::now().date_naive());
    let (snapshot, imported) = load_snapshot_from_path(catalog, captured_at)?;
    let borrower = load_borrower_from_path(profile)?;
    info!(
        products = snapshot.len(),
        captured_at = %snapshot.captured_at(),
        "catalog snapshot loaded"
    );

    let result = engine.recommend(&borrower, &snapshot)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Table => render_recommendation(&result, &snapshot, imported, top),
    }
    Ok(())
}

fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let CatalogArgs {
        catalog,
        captured_at,
        bank,
        kind,
        youth,
        mobile,
    } = args;

    let captured_at = captured_at.unwrap_or_else(|| Local::now().date_naive());
    let (snapshot, imported) = load_snapshot_from_path(catalog, captured_at)?;

    let mut products: Vec<&LoanProduct> = snapshot.products().iter().collect();
    if let Some(bank) = &bank {
        products.retain(|product| &product.bank == bank);
    }
    if let Some(kind) = kind {
        let kind = LoanKind::from(kind);
        products.retain(|product| product.kind == kind);
    }
    if youth {
        products.retain(|product| product.youth_preference);
    }
    if mobile {
        products.retain(|product| product.mobile_application);
    }

    render_catalog(&snapshot, &products, imported);
    Ok(())
}

fn load_snapshot_from_path(
    catalog: Option<PathBuf>,
    captured_at: NaiveDate,
) -> Result<(CatalogSnapshot, bool), AppError> {
    match catalog {
        Some(path) => CatalogImporter::from_path(path, captured_at)
            .map(|snapshot| (snapshot, true))
            .map_err(AppError::from),
        None => Ok((demo_snapshot(captured_at)?, false)),
    }
}

fn load_borrower_from_path(profile: Option<PathBuf>) -> Result<BorrowerProfile, AppError> {
    match profile {
        Some(path) => {
            let raw = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&raw)?)
        }
        None => Ok(demo_borrower()),
    }
}

fn render_recommendation(
    result: &RecommendationResult,
    snapshot: &CatalogSnapshot,
    imported: bool,
    top: Option<usize>,
) {
    println!("Loan product recommendation");
    println!(
        "Catalog snapshot: {} products (captured {})",
        snapshot.len(),
        snapshot.captured_at()
    );
    if imported {
        println!("Data source: catalog CSV import");
    } else {
        println!("Data source: built-in demo catalog");
    }

    if result.ranked_products.is_empty() {
        println!("\nNo eligible products for this borrower");
        return;
    }

    let limit = top.unwrap_or(result.ranked_products.len());
    println!("\nRanked products");
    for (rank, scored) in result.ranked_products.iter().take(limit).enumerate() {
        let amount_note = match scored.shortfall {
            Some(ShortfallReason::MissingCollateralValue) => {
                "no advance (missing collateral value)".to_string()
            }
            Some(ShortfallReason::RepaymentCapacityExhausted) => {
                "no advance (repayment capacity exhausted)".to_string()
            }
            None => format_amount(scored.max_loan_amount),
        };
        println!(
            "{:>2}. [{:.3}] {} | {} | {} | {} | LTV {}% | max loan {}",
            rank + 1,
            scored.score,
            scored.product.id.0,
            scored.product.bank,
            scored.product.name,
            scored.product.interest_rate,
            scored.product.ltv_ratio,
            amount_note
        );
    }

    if let Some(purchase) = &result.purchase_info {
        println!(
            "\nPurchase power (based on top product {})",
            purchase.top_product.product.id.0
        );
        println!(
            "- Max loan amount:    {}",
            format_amount(purchase.max_loan_amount)
        );
        println!(
            "- Liquid assets:      {}",
            format_amount(purchase.liquid_assets)
        );
        println!(
            "- Max purchase price: {}",
            format_amount(purchase.max_purchase_price)
        );
    }
}

fn render_catalog(snapshot: &CatalogSnapshot, products: &[&LoanProduct], imported: bool) {
    println!("Loan product catalog");
    println!(
        "Snapshot captured {} | {} of {} products match",
        snapshot.captured_at(),
        products.len(),
        snapshot.len()
    );
    if imported {
        println!("Data source: catalog CSV import");
    } else {
        println!("Data source: built-in demo catalog");
    }

    if products.is_empty() {
        println!("\nNo products match the given filters");
        return;
    }

    println!();
    for product in products {
        let cap = product
            .max_amount
            .map(format_amount)
            .unwrap_or_else(|| "no fixed cap".to_string());
        println!(
            "- {} | {} | {} | {} | {} | LTV {}% | cap {}",
            product.id.0,
            product.bank,
            product.name,
            product.kind.label(),
            product.interest_rate,
            product.ltv_ratio,
            cap
        );

        let mut flags = Vec::new();
        if product.youth_preference {
            flags.push("youth-preference");
        }
        if product.mobile_application {
            flags.push("mobile");
        }
        if product.dsr_relief {
            flags.push("dsr-relief");
        }
        if product.simplified_documentation {
            flags.push("simplified-docs");
        }
        if !flags.is_empty() {
            println!("  flags: {}", flags.join(", "));
        }
    }
}

/// Amounts are carried in 10,000-KRW units; render them in eok/man-won form
/// the way bank comparison sites quote them.
fn format_amount(man_won: u64) -> String {
    let eok = man_won / 10_000;
    let man = man_won % 10_000;
    match (eok, man) {
        (0, man) => format!("{man}만원"),
        (eok, 0) => format!("{eok}억원"),
        (eok, man) => format!("{eok}억 {man}만원"),
    }
}

/// Borrower used when no profile file is supplied: a first-time buyer
/// shopping for an apartment mortgage.
fn demo_borrower() -> BorrowerProfile {
    BorrowerProfile {
        age: Some(32),
        home_ownership: HomeOwnership::NoHome,
        annual_income: 5_000,
        credit_score: 750,
        loan_type_preference: LoanKind::Mortgage,
        existing_debt: 2_000,
        liquid_assets: 3_000,
        employment: EmploymentType::FullTime,
        employment_months: 48,
        rate_preference: RateType::Fixed,
        collateral_type: Some("metro-apartment".to_string()),
        collateral_value: Some(40_000),
        segment: BorrowerSegment::FirstTimeBuyer,
        preferred_bank: Some("Shinhan Bank".to_string()),
    }
}

fn demo_snapshot(captured_at: NaiveDate) -> Result<CatalogSnapshot, AppError> {
    let base = LoanProduct {
        id: ProductId(String::new()),
        bank: String::new(),
        name: String::new(),
        kind: LoanKind::Mortgage,
        interest_rate: InterestRateRange { min: 3.0, max: 4.0 },
        max_amount: None,
        term: "up to 30 years".to_string(),
        qualification: Qualification {
            min_age: Some(19),
            ..Qualification::default()
        },
        required_documents: BTreeSet::from(["identity".to_string(), "income-proof".to_string()]),
        eligible_collateral_types: BTreeSet::new(),
        rate_types: BTreeSet::from([RateType::Fixed]),
        ltv_ratio: 0,
        dsr_relief: false,
        mobile_application: false,
        youth_preference: false,
        preferential_rate: None,
        simplified_documentation: false,
    };

    let mut shinhan_mortgage = base.clone();
    shinhan_mortgage.id = ProductId("M-SH-01".to_string());
    shinhan_mortgage.bank = "Shinhan Bank".to_string();
    shinhan_mortgage.name = "i-Home Mortgage".to_string();
    shinhan_mortgage.interest_rate = InterestRateRange { min: 3.1, max: 4.5 };
    shinhan_mortgage.max_amount = Some(50_000);
    shinhan_mortgage.eligible_collateral_types =
        BTreeSet::from(["metro-apartment".to_string(), "officetel".to_string()]);
    shinhan_mortgage.rate_types = BTreeSet::from([RateType::Fixed, RateType::Variable]);
    shinhan_mortgage.ltv_ratio = 70;
    shinhan_mortgage.mobile_application = true;
    shinhan_mortgage.preferential_rate = Some(0.5);
    shinhan_mortgage.simplified_documentation = true;

    let mut kookmin_mortgage = base.clone();
    kookmin_mortgage.id = ProductId("M-KB-02".to_string());
    kookmin_mortgage.bank = "KB Kookmin Bank".to_string();
    kookmin_mortgage.name = "KB Star Home Loan".to_string();
    kookmin_mortgage.interest_rate = InterestRateRange { min: 3.4, max: 4.9 };
    kookmin_mortgage.max_amount = Some(60_000);
    kookmin_mortgage.qualification.min_income = Some(3_000);
    kookmin_mortgage.eligible_collateral_types =
        BTreeSet::from(["metro-apartment".to_string(), "detached-house".to_string()]);
    kookmin_mortgage.rate_types = BTreeSet::from([RateType::Variable]);
    kookmin_mortgage.ltv_ratio = 60;

    let mut woori_mortgage = base.clone();
    woori_mortgage.id = ProductId("M-WR-03".to_string());
    woori_mortgage.bank = "Woori Bank".to_string();
    woori_mortgage.name = "Woori First Home".to_string();
    woori_mortgage.interest_rate = InterestRateRange { min: 3.0, max: 4.2 };
    woori_mortgage.qualification.min_credit_score = Some(650);
    woori_mortgage.eligible_collateral_types = BTreeSet::from(["metro-apartment".to_string()]);
    woori_mortgage.rate_types = BTreeSet::from([RateType::Fixed, RateType::Mixed]);
    woori_mortgage.ltv_ratio = 80;
    woori_mortgage.dsr_relief = true;
    woori_mortgage.mobile_application = true;
    woori_mortgage.youth_preference = true;
    woori_mortgage.preferential_rate = Some(1.2);

    let mut hana_mortgage = base.clone();
    hana_mortgage.id = ProductId("M-HN-06".to_string());
    hana_mortgage.bank = "Hana Bank".to_string();
    hana_mortgage.name = "Hana Prime Mortgage".to_string();
    hana_mortgage.interest_rate = InterestRateRange { min: 3.2, max: 4.6 };
    hana_mortgage.max_amount = Some(45_000);
    hana_mortgage.qualification.min_credit_score = Some(800);
    hana_mortgage.eligible_collateral_types =
        BTreeSet::from(["metro-apartment".to_string(), "officetel".to_string()]);
    hana_mortgage.ltv_ratio = 65;

    let mut nonghyup_jeonse = base.clone();
    nonghyup_jeonse.id = ProductId("L-NH-04".to_string());
    nonghyup_jeonse.bank = "NH Nonghyup Bank".to_string();
    nonghyup_jeonse.name = "NH Jeonse Deposit Loan".to_string();
    nonghyup_jeonse.kind = LoanKind::LeaseDeposit;
    nonghyup_jeonse.interest_rate = InterestRateRange { min: 2.8, max: 3.9 };
    nonghyup_jeonse.max_amount = Some(22_000);
    nonghyup_jeonse.term = "2 years, renewable once".to_string();
    nonghyup_jeonse.qualification.min_income = Some(2_000);
    nonghyup_jeonse.rate_types = BTreeSet::from([RateType::Fixed, RateType::Variable]);
    nonghyup_jeonse.dsr_relief = true;
    nonghyup_jeonse.mobile_application = true;

    let mut hana_jeonse = base.clone();
    hana_jeonse.id = ProductId("L-HN-05".to_string());
    hana_jeonse.bank = "Hana Bank".to_string();
    hana_jeonse.name = "Hana Youth Jeonse Loan".to_string();
    hana_jeonse.kind = LoanKind::LeaseDeposit;
    hana_jeonse.interest_rate = InterestRateRange { min: 2.5, max: 3.4 };
    hana_jeonse.max_amount = Some(20_000);
    hana_jeonse.term = "2 years, renewable once".to_string();
    hana_jeonse.qualification.max_age = Some(34);
    hana_jeonse.mobile_application = true;
    hana_jeonse.youth_preference = true;
    hana_jeonse.preferential_rate = Some(0.8);
    hana_jeonse.simplified_documentation = true;

    let snapshot = CatalogSnapshot::assemble(
        captured_at,
        vec![
            shinhan_mortgage,
            kookmin_mortgage,
            woori_mortgage,
            hana_mortgage,
            nonghyup_jeonse,
            hana_jeonse,
        ],
    )?;
    Ok(snapshot)
}
