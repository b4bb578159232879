//! Motion polling loop
//!
//! The single cooperative consumer of the latch. Firmware wraps
//! [`run_motion_loop`] in an embassy task with its concrete collaborator
//! types and feeds host mode commands through the channel.

use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Receiver;
use embassy_time::{Duration, Ticker};

use crate::communication::command::ModeCommand;
use crate::communication::observer::EventObserver;
use crate::communication::transport::EventTransport;
use crate::devices::traits::{DataReadyLine, MotionSensor};
use crate::motion::MotionPipeline;

/// Latch poll period. Well above the sensor's 100 Hz output rate so a
/// sample is consumed long before the next data-ready edge.
pub const POLL_PERIOD: Duration = Duration::from_millis(1);

/// Drive the pipeline forever: poll on a ticker, apply host mode commands
/// as they arrive. Errors are logged and the loop keeps running; the
/// pipeline has no fatal conditions.
pub async fn run_motion_loop<S, L, T, O, const N: usize>(
    mut pipeline: MotionPipeline<'_, S, L, T, O>,
    commands: Receiver<'static, CriticalSectionRawMutex, ModeCommand, N>,
) -> !
where
    S: MotionSensor,
    L: DataReadyLine,
    T: EventTransport,
    O: EventObserver,
{
    crate::log_info!("motion loop started");
    let mut ticker = Ticker::every(POLL_PERIOD);

    loop {
        match select(commands.receive(), ticker.next()).await {
            Either::First(command) => {
                if pipeline.handle_mode_command(command).await.is_err() {
                    crate::log_warn!("mode command failed");
                }
            }
            Either::Second(()) => {
                if pipeline.poll().await.is_err() {
                    crate::log_warn!("motion poll failed");
                }
            }
        }
    }
}
