use clap::Subcommand;
use reveal_core::{
    Arena, ControlRect, DeadlineTarget, EvasionConfig, GateConfig, GateSession, Input, PointerKind,
    PointerSample,
};

#[derive(Subcommand)]
pub enum GateAction {
    /// Chase the decline control with a scripted pointer, printing events as JSON lines
    Simulate {
        /// Random seed for reproducible jitter
        #[arg(long)]
        seed: Option<u64>,
        /// Number of pointer samples to aim at the control
        #[arg(long, default_value = "25")]
        moves: u32,
    },
}

pub fn run(action: GateAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        GateAction::Simulate { seed, moves } => simulate(seed, moves),
    }
}

fn simulate(seed: Option<u64>, moves: u32) -> Result<(), Box<dyn std::error::Error>> {
    // Demo geometry roughly matching the gate card layout.
    let arena = Arena {
        x: 0.0,
        y: 0.0,
        width: 420.0,
        height: 260.0,
        padding: 10.0,
    };
    let control = ControlRect {
        width: 96.0,
        height: 44.0,
    };

    let target = DeadlineTarget::from_now_plus_secs(60);
    let mut session = GateSession::new(
        target,
        GateConfig {
            evasion: EvasionConfig {
                seed,
                ..EvasionConfig::default()
            },
            ..GateConfig::default()
        },
    );

    for _ in 0..moves {
        // Aim straight at the control's current center.
        let pos = session.decline_position();
        let sample = PointerSample {
            x: arena.x + pos.x + control.width / 2.0,
            y: arena.y + pos.y + control.height / 2.0,
            kind: PointerKind::Move,
        };
        for event in session.handle(Input::PointerMove {
            sample,
            arena,
            control,
        }) {
            println!("{}", serde_json::to_string(&event)?);
        }
        // Every missed grab also feeds the accept-growth rule.
        for event in session.handle(Input::Clicked {
            target_is_accept: false,
        }) {
            println!("{}", serde_json::to_string(&event)?);
        }
    }

    eprintln!(
        "final: decline=({:.1}, {:.1}) accept_scale={:.2}",
        session.decline_position().x,
        session.decline_position().y,
        session.accept_scale()
    );
    Ok(())
}
