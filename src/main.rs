//! Binary entry point for tintbook.
//!
//! This binary provides the CLI interface for the tintbook record store.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stderr/print_stdout in main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]
// Allow unnecessary_wraps for consistent command function signatures
#![allow(clippy::unnecessary_wraps)]
// Allow needless_pass_by_value for command functions
#![allow(clippy::needless_pass_by_value)]

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tintbook::services::{backup, query};
use tintbook::{
    AppointmentForm, CustomerForm, FilesystemStore, RecordId, SaleForm, Submitted, TintbookConfig,
    Workspace,
};

/// Tintbook - record keeping for a vehicle tinting and detailing shop.
#[derive(Parser)]
#[command(name = "tintbook")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Data directory override.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Manage customers.
    Customer {
        /// Customer subcommand.
        #[command(subcommand)]
        action: CustomerAction,
    },

    /// Manage appointments.
    Appointment {
        /// Appointment subcommand.
        #[command(subcommand)]
        action: AppointmentAction,
    },

    /// Manage sales.
    Sale {
        /// Sale subcommand.
        #[command(subcommand)]
        action: SaleAction,
    },

    /// Show or update shop settings.
    Settings {
        /// Settings subcommand.
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// Export all data to a backup file.
    Export {
        /// Output file path (default: timestamped name in the current directory).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import a backup file, overwriting existing data.
    Import {
        /// Backup file to import.
        file: PathBuf,

        /// Confirm the destructive overwrite.
        #[arg(long)]
        yes: bool,
    },

    /// Delete all data.
    Reset {
        /// Confirm the irreversible reset.
        #[arg(long)]
        yes: bool,
    },

    /// Show the dashboard summary.
    Status,
}

/// Customer subcommands.
#[derive(Subcommand)]
enum CustomerAction {
    /// Add a customer.
    Add {
        /// Customer name.
        name: String,

        /// Contact phone number.
        #[arg(long, default_value = "")]
        phone: String,

        /// Contact email address.
        #[arg(long, default_value = "")]
        email: String,

        /// Vehicle description.
        #[arg(long, default_value = "")]
        vehicle: String,

        /// Free-form notes.
        #[arg(long, default_value = "")]
        notes: String,
    },

    /// List customers.
    List {
        /// Filter across name, phone, email, and vehicle.
        #[arg(short, long, default_value = "")]
        search: String,
    },

    /// Update fields on an existing customer.
    Update {
        /// Record id.
        id: String,

        /// Customer name.
        #[arg(long)]
        name: Option<String>,

        /// Contact phone number.
        #[arg(long)]
        phone: Option<String>,

        /// Contact email address.
        #[arg(long)]
        email: Option<String>,

        /// Vehicle description.
        #[arg(long)]
        vehicle: Option<String>,

        /// Free-form notes.
        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a customer.
    Delete {
        /// Record id.
        id: String,
    },
}

/// Appointment subcommands.
#[derive(Subcommand)]
enum AppointmentAction {
    /// Add an appointment.
    Add {
        /// Calendar date, YYYY-MM-DD.
        #[arg(long, default_value = "")]
        date: String,

        /// Time of day.
        #[arg(long, default_value = "")]
        time: String,

        /// Customer name.
        #[arg(long, default_value = "")]
        customer: String,

        /// Vehicle description.
        #[arg(long, default_value = "")]
        vehicle: String,

        /// Service being performed.
        #[arg(long, default_value = "")]
        service: String,

        /// Quoted price.
        #[arg(long, default_value = "")]
        price: String,

        /// Status (default: Scheduled).
        #[arg(long, default_value = "")]
        status: String,
    },

    /// List appointments.
    List {
        /// Filter across date, time, customer, vehicle, service, and status.
        #[arg(short, long, default_value = "")]
        search: String,
    },

    /// Update fields on an existing appointment.
    Update {
        /// Record id.
        id: String,

        /// Calendar date, YYYY-MM-DD.
        #[arg(long)]
        date: Option<String>,

        /// Time of day.
        #[arg(long)]
        time: Option<String>,

        /// Customer name.
        #[arg(long)]
        customer: Option<String>,

        /// Vehicle description.
        #[arg(long)]
        vehicle: Option<String>,

        /// Service being performed.
        #[arg(long)]
        service: Option<String>,

        /// Quoted price.
        #[arg(long)]
        price: Option<String>,

        /// Status text.
        #[arg(long)]
        status: Option<String>,
    },

    /// Delete an appointment.
    Delete {
        /// Record id.
        id: String,
    },
}

/// Sale subcommands.
#[derive(Subcommand)]
enum SaleAction {
    /// Record a sale.
    Add {
        /// Calendar date, YYYY-MM-DD.
        #[arg(long, default_value = "")]
        date: String,

        /// Customer name.
        #[arg(long, default_value = "")]
        customer: String,

        /// What was sold.
        #[arg(long, default_value = "")]
        item: String,

        /// Amount charged.
        #[arg(long, default_value = "")]
        amount: String,

        /// Payment method.
        #[arg(long, default_value = "")]
        payment: String,

        /// Free-form notes.
        #[arg(long, default_value = "")]
        notes: String,
    },

    /// List sales.
    List {
        /// Filter across date, customer, item, payment, and notes.
        #[arg(short, long, default_value = "")]
        search: String,
    },

    /// Update fields on an existing sale.
    Update {
        /// Record id.
        id: String,

        /// Calendar date, YYYY-MM-DD.
        #[arg(long)]
        date: Option<String>,

        /// Customer name.
        #[arg(long)]
        customer: Option<String>,

        /// What was sold.
        #[arg(long)]
        item: Option<String>,

        /// Amount charged.
        #[arg(long)]
        amount: Option<String>,

        /// Payment method.
        #[arg(long)]
        payment: Option<String>,

        /// Free-form notes.
        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a sale.
    Delete {
        /// Record id.
        id: String,
    },
}

/// Settings subcommands.
#[derive(Subcommand)]
enum SettingsAction {
    /// Show current settings.
    Show,

    /// Update settings fields.
    Set {
        /// Business display name.
        #[arg(long)]
        business_name: Option<String>,

        /// Sales tax rate, percent.
        #[arg(long)]
        tax_rate: Option<String>,

        /// Street address.
        #[arg(long)]
        address: Option<String>,

        /// Shop phone number.
        #[arg(long)]
        shop_phone: Option<String>,

        /// Shop email address.
        #[arg(long)]
        shop_email: Option<String>,
    },
}

/// Main entry point.
fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match load_config(cli.config.as_deref(), cli.data_dir.clone()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        },
    };

    match run_command(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Initializes logging to stderr, honoring `RUST_LOG` when set.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "tintbook=debug" } else { "tintbook=warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Loads configuration, applying the CLI data-dir override.
fn load_config(
    config_path: Option<&Path>,
    data_dir: Option<PathBuf>,
) -> Result<TintbookConfig, Box<dyn std::error::Error>> {
    let mut config = match config_path {
        Some(path) => TintbookConfig::load_from_file(path)?,
        None => TintbookConfig::load_default(),
    };
    if let Some(dir) = data_dir {
        config = config.with_data_dir(dir);
    }
    Ok(config)
}

/// Runs the selected command.
fn run_command(cli: Cli, config: &TintbookConfig) -> Result<(), Box<dyn std::error::Error>> {
    let slots = FilesystemStore::with_create(&config.data_dir)?;
    let mut workspace = Workspace::open(slots);

    match cli.command {
        Commands::Customer { action } => cmd_customer(&mut workspace, action),
        Commands::Appointment { action } => cmd_appointment(&mut workspace, action),
        Commands::Sale { action } => cmd_sale(&mut workspace, action),
        Commands::Settings { action } => cmd_settings(&mut workspace, action),
        Commands::Export { output } => cmd_export(&workspace, output),
        Commands::Import { file, yes } => cmd_import(&mut workspace, &file, yes),
        Commands::Reset { yes } => cmd_reset(&mut workspace, yes),
        Commands::Status => cmd_status(&workspace, config),
    }
}

/// Reports a submit outcome.
fn report_submit(outcome: &Submitted, kind: &str) {
    match outcome {
        Submitted::Created(id) => println!("{kind} saved: {id}"),
        Submitted::Updated(id) => println!("{kind} updated: {id}"),
        Submitted::Skipped => println!("{kind} no longer exists; nothing was updated"),
    }
}

/// Customer commands.
fn cmd_customer(
    workspace: &mut Workspace<FilesystemStore>,
    action: CustomerAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        CustomerAction::Add {
            name,
            phone,
            email,
            vehicle,
            notes,
        } => {
            let outcome = workspace.submit_customer(&CustomerForm {
                name,
                phone,
                email,
                vehicle,
                notes,
            })?;
            report_submit(&outcome, "Customer");
        },

        CustomerAction::List { search } => {
            let rows = query::filter_customers(workspace.store().customers(), &search);
            if rows.is_empty() {
                println!("No customers yet");
            }
            for customer in rows {
                println!(
                    "{}  {} | {} | {} | {}",
                    customer.id, customer.name, customer.phone, customer.email, customer.vehicle
                );
            }
        },

        CustomerAction::Update {
            id,
            name,
            phone,
            email,
            vehicle,
            notes,
        } => {
            let id = RecordId::new(id);
            let Some(mut form) = workspace.begin_customer_edit(&id) else {
                eprintln!("No customer with id {id}");
                return Ok(());
            };
            if let Some(name) = name {
                form.name = name;
            }
            if let Some(phone) = phone {
                form.phone = phone;
            }
            if let Some(email) = email {
                form.email = email;
            }
            if let Some(vehicle) = vehicle {
                form.vehicle = vehicle;
            }
            if let Some(notes) = notes {
                form.notes = notes;
            }
            let outcome = workspace.submit_customer(&form)?;
            report_submit(&outcome, "Customer");
        },

        CustomerAction::Delete { id } => {
            if workspace.delete_customer(&RecordId::new(id))? {
                println!("Customer deleted");
            } else {
                println!("No matching customer");
            }
        },
    }

    Ok(())
}

/// Appointment commands.
fn cmd_appointment(
    workspace: &mut Workspace<FilesystemStore>,
    action: AppointmentAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        AppointmentAction::Add {
            date,
            time,
            customer,
            vehicle,
            service,
            price,
            status,
        } => {
            let outcome = workspace.submit_appointment(&AppointmentForm {
                date,
                time,
                customer,
                vehicle,
                service,
                price,
                status,
            })?;
            report_submit(&outcome, "Appointment");
        },

        AppointmentAction::List { search } => {
            let rows = query::filter_appointments(workspace.store().appointments(), &search);
            if rows.is_empty() {
                println!("No appointments yet");
            }
            for appointment in rows {
                println!(
                    "{}  {} {} | {} | {} | {:.2} | {}",
                    appointment.id,
                    appointment.date,
                    appointment.time,
                    appointment.customer,
                    appointment.service,
                    appointment.price,
                    appointment.status
                );
            }
        },

        AppointmentAction::Update {
            id,
            date,
            time,
            customer,
            vehicle,
            service,
            price,
            status,
        } => {
            let id = RecordId::new(id);
            let Some(mut form) = workspace.begin_appointment_edit(&id) else {
                eprintln!("No appointment with id {id}");
                return Ok(());
            };
            if let Some(date) = date {
                form.date = date;
            }
            if let Some(time) = time {
                form.time = time;
            }
            if let Some(customer) = customer {
                form.customer = customer;
            }
            if let Some(vehicle) = vehicle {
                form.vehicle = vehicle;
            }
            if let Some(service) = service {
                form.service = service;
            }
            if let Some(price) = price {
                form.price = price;
            }
            if let Some(status) = status {
                form.status = status;
            }
            let outcome = workspace.submit_appointment(&form)?;
            report_submit(&outcome, "Appointment");
        },

        AppointmentAction::Delete { id } => {
            if workspace.delete_appointment(&RecordId::new(id))? {
                println!("Appointment deleted");
            } else {
                println!("No matching appointment");
            }
        },
    }

    Ok(())
}

/// Sale commands.
fn cmd_sale(
    workspace: &mut Workspace<FilesystemStore>,
    action: SaleAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        SaleAction::Add {
            date,
            customer,
            item,
            amount,
            payment,
            notes,
        } => {
            let outcome = workspace.submit_sale(&SaleForm {
                date,
                customer,
                item,
                amount,
                payment,
                notes,
            })?;
            report_submit(&outcome, "Sale");
        },

        SaleAction::List { search } => {
            let rows = query::filter_sales(workspace.store().sales(), &search);
            if rows.is_empty() {
                println!("No sales yet");
            }
            for sale in rows {
                println!(
                    "{}  {} | {} | {} | {:.2} | {}",
                    sale.id, sale.date, sale.customer, sale.item, sale.amount, sale.payment
                );
            }
        },

        SaleAction::Update {
            id,
            date,
            customer,
            item,
            amount,
            payment,
            notes,
        } => {
            let id = RecordId::new(id);
            let Some(mut form) = workspace.begin_sale_edit(&id) else {
                eprintln!("No sale with id {id}");
                return Ok(());
            };
            if let Some(date) = date {
                form.date = date;
            }
            if let Some(customer) = customer {
                form.customer = customer;
            }
            if let Some(item) = item {
                form.item = item;
            }
            if let Some(amount) = amount {
                form.amount = amount;
            }
            if let Some(payment) = payment {
                form.payment = payment;
            }
            if let Some(notes) = notes {
                form.notes = notes;
            }
            let outcome = workspace.submit_sale(&form)?;
            report_submit(&outcome, "Sale");
        },

        SaleAction::Delete { id } => {
            if workspace.delete_sale(&RecordId::new(id))? {
                println!("Sale deleted");
            } else {
                println!("No matching sale");
            }
        },
    }

    Ok(())
}

/// Settings commands.
fn cmd_settings(
    workspace: &mut Workspace<FilesystemStore>,
    action: SettingsAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        SettingsAction::Show => {
            let settings = workspace.store().settings();
            println!("Business Name: {}", settings.business_name);
            println!("Tax Rate:      {}", settings.tax_rate);
            println!("Address:       {}", settings.address);
            println!("Phone:         {}", settings.shop_phone);
            println!("Email:         {}", settings.shop_email);
        },

        SettingsAction::Set {
            business_name,
            tax_rate,
            address,
            shop_phone,
            shop_email,
        } => {
            let mut form = workspace.store().settings().to_form();
            if let Some(business_name) = business_name {
                form.business_name = business_name;
            }
            if let Some(tax_rate) = tax_rate {
                form.tax_rate = tax_rate;
            }
            if let Some(address) = address {
                form.address = address;
            }
            if let Some(shop_phone) = shop_phone {
                form.shop_phone = shop_phone;
            }
            if let Some(shop_email) = shop_email {
                form.shop_email = shop_email;
            }
            workspace.save_settings(&form)?;
            println!("Settings saved");
        },
    }

    Ok(())
}

/// Export command.
fn cmd_export(
    workspace: &Workspace<FilesystemStore>,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = workspace.export_json()?;
    let path = output.unwrap_or_else(|| PathBuf::from(backup::file_name(chrono::Utc::now())));
    std::fs::write(&path, json)?;
    println!("Data exported to {}", path.display());
    Ok(())
}

/// Import command.
fn cmd_import(
    workspace: &mut Workspace<FilesystemStore>,
    file: &Path,
    yes: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !yes {
        eprintln!("Importing will overwrite existing data. Re-run with --yes to continue.");
        return Ok(());
    }

    let text = std::fs::read_to_string(file)?;
    let summary = workspace.import_json(&text)?;

    println!(
        "Data imported: {} customers, {} appointments, {} sales",
        summary.customers, summary.appointments, summary.sales
    );
    if summary.skipped > 0 {
        println!("Skipped {} records that could not be decoded", summary.skipped);
    }
    for warning in &summary.warnings {
        eprintln!("Warning: {warning}");
    }

    Ok(())
}

/// Reset command.
fn cmd_reset(
    workspace: &mut Workspace<FilesystemStore>,
    yes: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !yes {
        eprintln!("Reset deletes ALL data and cannot be undone. Re-run with --yes to continue.");
        return Ok(());
    }

    workspace.reset_all()?;
    println!("All data reset");
    Ok(())
}

/// Status command.
fn cmd_status(
    workspace: &Workspace<FilesystemStore>,
    config: &TintbookConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Tintbook Status");
    println!("===============");
    println!();
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!("Data Directory: {}", config.data_dir.display());
    println!();

    let store = workspace.store();
    println!("Customers:    {}", store.customers().len());
    println!("Appointments: {}", store.appointments().len());
    println!("Sales:        {}", store.sales().len());
    println!();

    let kpis = workspace.kpis();
    println!("Upcoming appointments: {}", kpis.upcoming_appointments);
    println!("Revenue this month:    {:.2}", kpis.monthly_revenue);

    let settings = store.settings();
    if !settings.business_name.is_empty() {
        println!();
        println!("Business: {}", settings.business_name);
    }

    Ok(())
}
