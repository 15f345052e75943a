use chrono::Local;
use log::{error, info};

use family_bank::domain::formatting::format_currency;
use family_bank::storage::csv::GlobalConfigRepository;
use family_bank::storage::traits::GlobalConfigStorage;
use family_bank::{Backend, CsvConnection};
use shared::DashboardSummary;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let as_json = std::env::args().skip(1).any(|arg| arg == "--json");

    let connection = CsvConnection::new_default()?;
    let backend = Backend::new(connection.clone());
    info!("Using data directory {}", connection.base_directory().display());

    let summary = backend.dashboard_service.dashboard(Local::now().date_naive())?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let symbol = GlobalConfigRepository::new(connection)
        .get_global_config()?
        .currency_symbol;
    print_summary(&summary, &symbol);
    if let Some(pending) = backend.goal_service.pending_recycle()? {
        println!("\nGoal {} is waiting for a new name and target.", pending.goal_id);
    }
    Ok(())
}

fn print_summary(summary: &DashboardSummary, symbol: &str) {
    println!("Family Trust Bank");
    println!("=================");
    println!("Commission earned: {}", format_currency(summary.total_earnings, symbol));

    println!("\nClients:");
    if summary.clients.is_empty() {
        println!("  (no accounts yet)");
    }
    for client in &summary.clients {
        println!("  {:<20} {:>12}", client.name, format_currency(client.balance, symbol));
    }

    let budget = &summary.budget;
    println!("\nAvailable cash:    {}", format_currency(budget.available_cash, symbol));
    println!("Saved in goals:    {}", format_currency(budget.saved_in_goals, symbol));
    for goal in &budget.goals {
        println!(
            "  [{}] {:<16} {:>10} / {:<10} {:>3.0}%{}",
            goal.id,
            goal.name,
            format_currency(goal.balance, symbol),
            format_currency(goal.target, symbol),
            goal.progress * 100.0,
            if goal.is_complete { "  complete!" } else { "" }
        );
    }

    println!("\nPiggy bank: {}", summary.pig_image);
    println!("Today's {}: {}", summary.daily_content.kind, summary.daily_content.text);
}
