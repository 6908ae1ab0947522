//! CLI handlers for rota data.

use crate::cli::{AvailabilityCommands, SwapsCommands};
use crate::client::ApiClient;
use crate::types::TimeWindow;

type CliResult = Result<(), Box<dyn std::error::Error>>;

pub async fn handle_me(client: &ApiClient) -> CliResult {
    let me = client.users().me().await?;
    println!("{} <{}>", me.display_name(), me.email.as_deref().unwrap_or("-"));
    println!("  username: {}", me.username);
    println!("  role:     {}", me.role);
    if let Some(rate) = me.pay_rate {
        println!("  pay rate: {rate:.2}/h");
    }
    Ok(())
}

pub async fn handle_pay(client: &ApiClient) -> CliResult {
    let pay = client.pay().estimate().await?;
    println!("This month: {:.2}", pay.current_month);
    println!("Last month: {:.2}", pay.previous_month);
    Ok(())
}

pub async fn handle_availability(client: &ApiClient, command: AvailabilityCommands) -> CliResult {
    let api = client.availability();
    match command {
        AvailabilityCommands::List => {
            let mut slots = api.list().await?;
            slots.sort_by_key(|s| s.start_time);
            if slots.is_empty() {
                println!("No availability slots.");
            }
            for slot in slots {
                println!(
                    "#{:<5} {} - {}",
                    slot.id,
                    slot.start_time.format("%a %Y-%m-%d %H:%M"),
                    slot.end_time.format("%H:%M")
                );
            }
        }
        AvailabilityCommands::Add { start, end } => {
            let slot = api.create(TimeWindow::new(start, end)?).await?;
            println!("Added slot #{}", slot.id);
        }
        AvailabilityCommands::Remove { id } => {
            api.delete(id).await?;
            println!("Removed slot #{id}");
        }
    }
    Ok(())
}

pub async fn handle_swaps(client: &ApiClient, command: SwapsCommands) -> CliResult {
    let api = client.swaps();
    match command {
        SwapsCommands::Pending => {
            let pending = api.pending().await?;
            if pending.is_empty() {
                println!("No pending swap requests.");
            }
            for swap in pending {
                println!("#{:<5} shift {:<6} {}", swap.id, swap.shift, swap.reason);
            }
        }
        SwapsCommands::Approve { id } => {
            api.approve(id).await?;
            println!("Approved swap #{id}");
        }
        SwapsCommands::Reject { id } => {
            api.reject(id).await?;
            println!("Rejected swap #{id}");
        }
    }
    Ok(())
}

pub async fn handle_fairness(client: &ApiClient) -> CliResult {
    let report = client.analytics().fairness().await?;
    println!("Employees:      {}", report.total_employees);
    println!("Average shifts: {:.2}", report.average_shifts);
    println!("Fairness score: {:.2}", report.fairness_score);
    for (employee, hours) in report.total_hours() {
        println!("  {:<24} {hours:>7.2}h", employee.label());
    }
    Ok(())
}

pub async fn handle_notifications(client: &ApiClient) -> CliResult {
    let notes = client.notifications().unread().await?;
    if notes.is_empty() {
        println!("No unread notifications.");
    }
    for note in notes {
        println!("[{}] {}", note.created_at.format("%Y-%m-%d %H:%M"), note.message);
    }
    Ok(())
}
