use clap::Parser;
use hotel_desk::config::Command;
use hotel_desk::utils::{logger, validation, validation::Validate};
use hotel_desk::{
    AddOutcome, CliConfig, Hotel, HotelConfig, HotelError, LocalStorage, Room, SaveStatus,
};

fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    // 初始化日誌
    if args.log_json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::debug!("CLI config: {:?}", args);

    // 載入配置，未指定時使用內建預設
    let mut config = match &args.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match HotelConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::error!("❌ Failed to load config file '{}': {}", path, e);
                    exit_with(&e);
                }
            }
        }
        None => HotelConfig::default(),
    };

    if let Some(data_file) = &args.data_file {
        config.hotel.data_file = data_file.clone();
        tracing::info!("🔧 Data file overridden to: {}", data_file);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&HotelError::ConfigError {
            message: e.to_string(),
        });
    }

    let mut hotel = config.open_hotel();

    if let Err(e) = run(&mut hotel, args.command) {
        tracing::debug!(
            "Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );

        exit_with(&e);
    }

    Ok(())
}

fn run(hotel: &mut Hotel<LocalStorage>, command: Command) -> Result<(), HotelError> {
    match command {
        Command::List => {
            println!("🏨 {}", hotel.name());
            if hotel.rooms().is_empty() {
                println!("(no rooms)");
            }
            for room in hotel.rooms() {
                println!("{}", room.describe());
            }
        }
        Command::CheckIn { room, guest } => {
            validation::validate_non_empty_string("guest", &guest)?;
            let receipt = hotel.check_in(room, guest.trim())?;
            println!(
                "✅ {} checked into room {}.",
                receipt.guest_name, receipt.room_number
            );
            report_save(&receipt.save);
        }
        Command::CheckOut { room } => {
            let receipt = hotel.check_out(room)?;
            println!("🧾 Invoice");
            println!("Guest: {}", receipt.bill.guest);
            println!("Room: {}", receipt.room_number);
            println!("Amount due: {:.2}", receipt.bill.amount);
            report_save(&receipt.save);
        }
        Command::AddRoom {
            number,
            capacity,
            price,
            suite,
            whirlpool,
        } => {
            validation::validate_positive_number("capacity", capacity, 1)?;

            let new_room = if suite {
                Room::suite(number, capacity, price, whirlpool)
            } else {
                Room::standard(number, capacity, price)
            };

            match hotel.add_room(new_room) {
                AddOutcome::Added(save) => {
                    println!("✅ Room {} added.", number);
                    report_save(&save);
                }
                AddOutcome::AlreadyExists => println!("ℹ️ Room {} already exists.", number),
                AddOutcome::Rejected(e) => return Err(e),
            }
        }
    }

    Ok(())
}

/// 輸出錯誤訊息，並依嚴重程度結束程式（Low 視為成功）
fn exit_with(e: &HotelError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.severity().exit_code())
}

fn report_save(save: &SaveStatus) {
    if let SaveStatus::Failed(e) = save {
        eprintln!("⚠️ Changes were not saved: {}", e.user_friendly_message());
    }
}
