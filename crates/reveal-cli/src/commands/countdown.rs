use clap::{Args, Subcommand};
use reveal_core::{CountdownEngine, DeadlineTarget, Event, DEFAULT_OFFSET_MINUTES};

#[derive(Args)]
pub struct TargetArgs {
    /// Target year
    #[arg(long, default_value = "2026")]
    year: i32,
    /// Target month (1-12)
    #[arg(long, default_value = "2")]
    month: u32,
    /// Target day of month
    #[arg(long, default_value = "2")]
    day: u32,
    /// Target hour
    #[arg(long, default_value = "0")]
    hour: u32,
    /// Target minute
    #[arg(long, default_value = "0")]
    minute: u32,
    /// Target second
    #[arg(long, default_value = "0")]
    second: u32,
    /// Fixed UTC offset in minutes (330 = +05:30)
    #[arg(long, default_value_t = DEFAULT_OFFSET_MINUTES)]
    offset_minutes: i32,
    /// Ignore the calendar fields and count down from N seconds from now
    #[arg(long)]
    in_secs: Option<u64>,
}

impl TargetArgs {
    fn target(&self) -> Result<DeadlineTarget, Box<dyn std::error::Error>> {
        if let Some(secs) = self.in_secs {
            return Ok(DeadlineTarget::from_now_plus_secs(secs));
        }
        Ok(DeadlineTarget::new(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.offset_minutes,
        )?)
    }
}

#[derive(Subcommand)]
pub enum CountdownAction {
    /// Drive the countdown with a one-second loop, printing events as JSON lines
    Run {
        #[command(flatten)]
        target: TargetArgs,
        /// Emit the final-seconds audible cue events
        #[arg(long)]
        sound: bool,
    },
    /// Print a single countdown snapshot as JSON
    Status {
        #[command(flatten)]
        target: TargetArgs,
    },
}

pub fn run(action: CountdownAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        CountdownAction::Run { target, sound } => {
            let mut engine = CountdownEngine::new(target.target()?);
            if sound {
                engine.set_sound(true);
            }
            let mut events = engine.start();
            loop {
                let mut done = false;
                for event in &events {
                    println!("{}", serde_json::to_string(event)?);
                    if matches!(event, Event::CountdownCompleted { .. }) {
                        done = true;
                    }
                }
                if done {
                    engine.stop();
                    return Ok(());
                }
                std::thread::sleep(std::time::Duration::from_secs(1));
                events = engine.tick();
            }
        }
        CountdownAction::Status { target } => {
            let mut engine = CountdownEngine::new(target.target()?);
            engine.start();
            println!("{}", serde_json::to_string(&engine.state())?);
            Ok(())
        }
    }
}
