//! Acquisition pipeline
//!
//! Owns the per-sample control flow and every piece of mutable acquisition
//! state except the latch, which is shared with the interrupt handler. One
//! `poll` consumes at most one latched interrupt: burst read, filter step,
//! encode, offer to the observer, transmit.
//!
//! The pipeline is single-consumer by construction; calls must come from
//! one polling context. Samples are therefore processed in strict arrival
//! order, and an interrupt landing mid-read re-raises the latch for the
//! next poll instead of being dropped or queued.

use core::fmt;

use crate::communication::command::ModeCommand;
use crate::communication::events::{encode_mode_change, encode_motion_data};
use crate::communication::observer::{EventAction, EventObserver, NullObserver};
use crate::communication::protocol::{
    CHANNEL_ACCEL, CHANNEL_GYRO, EVT_MOTION_DATA, EVT_MOTION_MODE, MOTION_SENSOR_INDEX,
    PACKET_CLASS_MOTION,
};
use crate::communication::transport::{EventTransport, TransportError};
use crate::devices::traits::{DataReadyLine, MotionError, MotionSensor};
use crate::motion::filter::SmoothingFilter;
use crate::motion::latch::DataReadyLatch;
use crate::motion::mode::{ModeChangeOrigin, MotionMode};
use crate::motion::state::MotionState;

/// Pipeline error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "rp2350", derive(defmt::Format))]
pub enum PipelineError {
    /// Sensor operation failed
    Sensor(MotionError),
    /// Event transmission failed
    Transport(TransportError),
}

impl From<MotionError> for PipelineError {
    fn from(err: MotionError) -> Self {
        PipelineError::Sensor(err)
    }
}

impl From<TransportError> for PipelineError {
    fn from(err: TransportError) -> Self {
        PipelineError::Transport(err)
    }
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Sensor(err) => write!(f, "sensor: {}", err),
            PipelineError::Transport(err) => write!(f, "transport: {}", err),
        }
    }
}

/// Pipeline counters for monitoring and diagnostics
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "rp2350", derive(defmt::Format))]
pub struct PipelineStats {
    /// Samples read, filtered, and encoded
    pub samples_processed: u32,
    /// Events handed to the transport
    pub events_sent: u32,
    /// Events suppressed by the observer
    pub events_vetoed: u32,
    /// Burst reads that failed on the bus
    pub read_errors: u32,
}

/// Interrupt-driven acquisition pipeline
///
/// Generic over its four collaborators: the sensor, the interrupt line
/// control, the event transport, and the observer gate. Construct with
/// [`MotionPipeline::new`] (no observer) and attach one with
/// [`MotionPipeline::with_observer`].
pub struct MotionPipeline<'a, S, L, T, O> {
    sensor: S,
    irq: L,
    transport: T,
    observer: O,
    latch: &'a DataReadyLatch,
    state: MotionState,
    filter: SmoothingFilter,
    mode: MotionMode,
    stats: PipelineStats,
}

impl<'a, S, L, T> MotionPipeline<'a, S, L, T, NullObserver>
where
    S: MotionSensor,
    L: DataReadyLine,
    T: EventTransport,
{
    /// Create a pipeline with no observer registered
    ///
    /// Starts in `Disabled` mode with zeroed state; the latch is typically a
    /// `static` shared with the platform's interrupt glue.
    pub fn new(sensor: S, irq: L, transport: T, latch: &'a DataReadyLatch) -> Self {
        Self {
            sensor,
            irq,
            transport,
            observer: NullObserver,
            latch,
            state: MotionState::new(),
            filter: SmoothingFilter::default(),
            mode: MotionMode::Disabled,
            stats: PipelineStats::default(),
        }
    }
}

impl<'a, S, L, T, O> MotionPipeline<'a, S, L, T, O>
where
    S: MotionSensor,
    L: DataReadyLine,
    T: EventTransport,
    O: EventObserver,
{
    /// Replace the observer, keeping all other state
    pub fn with_observer<O2: EventObserver>(self, observer: O2) -> MotionPipeline<'a, S, L, T, O2> {
        MotionPipeline {
            sensor: self.sensor,
            irq: self.irq,
            transport: self.transport,
            observer,
            latch: self.latch,
            state: self.state,
            filter: self.filter,
            mode: self.mode,
            stats: self.stats,
        }
    }

    /// Current acquisition mode
    pub fn mode(&self) -> MotionMode {
        self.mode
    }

    /// Pipeline counters
    pub fn stats(&self) -> PipelineStats {
        self.stats
    }

    /// Acquisition state (raw, filtered, and shadow vectors)
    pub fn state(&self) -> &MotionState {
        &self.state
    }

    /// Sensor collaborator
    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    /// Sensor collaborator, mutable (runtime reconfiguration)
    pub fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }

    /// Transport collaborator
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// One-time sensor bring-up; the device stays in whatever power state
    /// its init sequence leaves it until the mode controller takes over
    pub async fn init_sensor(&mut self) -> Result<(), PipelineError> {
        self.sensor.init().await?;
        Ok(())
    }

    /// Switch the acquisition lifecycle
    ///
    /// Disabled→Enabled zeroes the filtered state, forces the latch so the
    /// first poll always reads (no startup stall waiting for an edge),
    /// attaches the interrupt path, and wakes the sensor. Enabled→Disabled
    /// sleeps the sensor and detaches the interrupt path, leaving filter
    /// state for the next enable to reset.
    ///
    /// Every change is offered to the observer and transmitted as a
    /// mode-change event unless it replays a host command.
    pub async fn set_mode(
        &mut self,
        mode: MotionMode,
        origin: ModeChangeOrigin,
    ) -> Result<(), PipelineError> {
        match mode {
            MotionMode::Enabled => {
                self.state.reset_filtered();
                self.latch.raise();
                self.irq.enable();
                self.sensor.set_sleep_enabled(false).await?;
            }
            MotionMode::Disabled => {
                self.sensor.set_sleep_enabled(true).await?;
                self.irq.disable();
            }
        }
        self.mode = mode;
        crate::log_info!("motion mode -> {}", mode.as_wire());

        // Echo suppression: a change replaying a host command is not
        // reported back to the host that commanded it.
        if origin != ModeChangeOrigin::HostCommand {
            match self.observer.on_mode_change(MOTION_SENSOR_INDEX, mode) {
                EventAction::Skip => self.stats.events_vetoed += 1,
                EventAction::Forward => {
                    let payload = encode_mode_change(MOTION_SENSOR_INDEX, mode);
                    self.transport
                        .send_event(PACKET_CLASS_MOTION, EVT_MOTION_MODE, &payload)
                        .await?;
                    self.stats.events_sent += 1;
                }
            }
        }

        Ok(())
    }

    /// Apply a host mode command (echo suppressed)
    pub async fn handle_mode_command(&mut self, command: ModeCommand) -> Result<(), PipelineError> {
        self.set_mode(command.mode, ModeChangeOrigin::HostCommand).await
    }

    /// Run one iteration of the polling loop
    ///
    /// Returns `Ok(false)` without touching the bus when no interrupt is
    /// pending. Otherwise consumes the latch, then reads: an interrupt
    /// arriving mid-read re-raises the latch and is handled next poll.
    pub async fn poll(&mut self) -> Result<bool, PipelineError> {
        if !self.latch.take() {
            return Ok(false);
        }

        let sample = match self.sensor.read_motion6().await {
            Ok(sample) => sample,
            Err(err) => {
                self.stats.read_errors += 1;
                return Err(err.into());
            }
        };

        self.state.store_sample(&sample);
        self.filter.apply(&mut self.state);
        self.stats.samples_processed += 1;

        let data = [
            self.state.accel.x,
            self.state.accel.y,
            self.state.accel.z,
            self.state.gyro.x,
            self.state.gyro.y,
            self.state.gyro.z,
        ];
        match self
            .observer
            .on_motion_data(MOTION_SENSOR_INDEX, CHANNEL_ACCEL | CHANNEL_GYRO, &data)
        {
            EventAction::Skip => self.stats.events_vetoed += 1,
            EventAction::Forward => {
                let payload =
                    encode_motion_data(MOTION_SENSOR_INDEX, &self.state.accel, &self.state.gyro);
                self.transport
                    .send_event(PACKET_CLASS_MOTION, EVT_MOTION_DATA, &payload)
                    .await?;
                self.stats.events_sent += 1;
            }
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::communication::mock::MockTransport;
    use crate::devices::imu::mock::{MockDataReadyLine, MockMotionSensor};
    use crate::devices::traits::{MotionSample, Vector3i16};

    type TestPipeline<'a, O> =
        MotionPipeline<'a, MockMotionSensor, MockDataReadyLine, MockTransport, O>;

    fn pipeline<'a>(
        latch: &'a DataReadyLatch,
        samples: &[MotionSample],
    ) -> TestPipeline<'a, NullObserver> {
        MotionPipeline::new(
            MockMotionSensor::with_samples(samples),
            MockDataReadyLine::new(),
            MockTransport::new(),
            latch,
        )
    }

    fn sample(ax: i16, ay: i16, az: i16, gx: i16, gy: i16, gz: i16) -> MotionSample {
        MotionSample {
            accel: Vector3i16::new(ax, ay, az),
            gyro: Vector3i16::new(gx, gy, gz),
        }
    }

    /// Observer with configurable verdicts that records what it saw
    #[derive(Default)]
    struct RecordingObserver {
        veto_data: bool,
        veto_mode: bool,
        data_events: u32,
        mode_events: u32,
        last_data: [i16; 6],
    }

    impl EventObserver for RecordingObserver {
        fn on_motion_data(&mut self, _sensor: u8, _channels: u8, data: &[i16; 6]) -> EventAction {
            self.data_events += 1;
            self.last_data = *data;
            if self.veto_data {
                EventAction::Skip
            } else {
                EventAction::Forward
            }
        }

        fn on_mode_change(&mut self, _sensor: u8, _mode: MotionMode) -> EventAction {
            self.mode_events += 1;
            if self.veto_mode {
                EventAction::Skip
            } else {
                EventAction::Forward
            }
        }
    }

    #[tokio::test]
    async fn test_poll_without_latch_is_noop() {
        let latch = DataReadyLatch::new();
        let mut pipeline = pipeline(&latch, &[]);

        assert_eq!(pipeline.poll().await, Ok(false));
        assert_eq!(pipeline.sensor().read_count(), 0);
        assert!(pipeline.transport().sent().is_empty());
    }

    #[tokio::test]
    async fn test_poll_consumes_latch_exactly_once() {
        let latch = DataReadyLatch::new();
        let mut pipeline = pipeline(&latch, &[]);

        latch.raise();
        assert_eq!(pipeline.poll().await, Ok(true));
        assert!(!latch.is_raised());

        // One interrupt, one processing sequence
        assert_eq!(pipeline.poll().await, Ok(false));
        assert_eq!(pipeline.sensor().read_count(), 1);
        assert_eq!(pipeline.transport().sent().len(), 1);
    }

    #[tokio::test]
    async fn test_end_to_end_first_sample() {
        let latch = DataReadyLatch::new();
        let mut pipeline = pipeline(&latch, &[sample(1000, 0, 0, 0, 0, 0)]);

        pipeline
            .set_mode(MotionMode::Enabled, ModeChangeOrigin::Internal)
            .await
            .unwrap();
        assert_eq!(pipeline.poll().await, Ok(true));

        // 0 + 0.25 * (1000 - 0) = 250 on ax, all other axes stay zero
        assert_eq!(pipeline.state().accel, Vector3i16::new(250, 0, 0));
        assert_eq!(pipeline.state().gyro, Vector3i16::zeros());

        let sent = pipeline.transport().sent();
        assert_eq!(sent.len(), 2); // mode-change event, then motion data

        assert_eq!(sent[0].id, EVT_MOTION_MODE);
        assert_eq!(sent[0].payload.as_slice(), &[0x00, 0x01]);

        assert_eq!(sent[1].class, PACKET_CLASS_MOTION);
        assert_eq!(sent[1].id, EVT_MOTION_DATA);
        let payload = sent[1].payload.as_slice();
        assert_eq!(&payload[..3], &[0x00, 0x03, 0x0C]);
        assert_eq!(&payload[3..5], &[0xFA, 0x00]); // 250 little-endian
        assert!(payload[5..].iter().all(|&b| b == 0));
    }

    #[tokio::test]
    async fn test_enable_side_effects() {
        let latch = DataReadyLatch::new();
        let mut pipeline = pipeline(&latch, &[]);

        pipeline
            .set_mode(MotionMode::Enabled, ModeChangeOrigin::Internal)
            .await
            .unwrap();

        assert_eq!(pipeline.mode(), MotionMode::Enabled);
        // First poll must run even though no edge has arrived yet
        assert!(latch.is_raised());
        assert!(pipeline.irq.enabled);
        assert!(!pipeline.sensor().sleeping());
    }

    #[tokio::test]
    async fn test_disable_side_effects() {
        let latch = DataReadyLatch::new();
        let mut pipeline = pipeline(&latch, &[]);

        pipeline
            .set_mode(MotionMode::Enabled, ModeChangeOrigin::Internal)
            .await
            .unwrap();
        pipeline
            .set_mode(MotionMode::Disabled, ModeChangeOrigin::Internal)
            .await
            .unwrap();

        assert_eq!(pipeline.mode(), MotionMode::Disabled);
        assert!(pipeline.sensor().sleeping());
        assert!(!pipeline.irq.enabled);
        assert_eq!(pipeline.irq.disable_count, 1);

        let sent = pipeline.transport().sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[1].payload.as_slice(), &[0x00, 0x00]);
    }

    #[tokio::test]
    async fn test_reenable_resets_filter_state() {
        let latch = DataReadyLatch::new();
        let mut pipeline = pipeline(&latch, &[sample(400, 400, 400, 0, 0, 0)]);

        pipeline
            .set_mode(MotionMode::Enabled, ModeChangeOrigin::Internal)
            .await
            .unwrap();
        pipeline.poll().await.unwrap();
        assert_eq!(pipeline.state().accel, Vector3i16::new(100, 100, 100));

        // Re-enable must zero the average before the next filter step;
        // otherwise the first all-zero read would land at 75, not 0.
        pipeline
            .set_mode(MotionMode::Enabled, ModeChangeOrigin::Internal)
            .await
            .unwrap();
        pipeline.poll().await.unwrap();
        assert_eq!(pipeline.state().accel, Vector3i16::zeros());
    }

    #[tokio::test]
    async fn test_host_command_suppresses_echo() {
        let latch = DataReadyLatch::new();
        let mut pipeline = pipeline(&latch, &[]);

        pipeline
            .handle_mode_command(ModeCommand {
                sensor: MOTION_SENSOR_INDEX,
                mode: MotionMode::Enabled,
            })
            .await
            .unwrap();

        // Mode applied with full side effects, but no event echoed back
        assert_eq!(pipeline.mode(), MotionMode::Enabled);
        assert!(!pipeline.sensor().sleeping());
        assert!(pipeline.transport().sent().is_empty());
    }

    #[tokio::test]
    async fn test_internal_mode_change_is_reported() {
        let latch = DataReadyLatch::new();
        let mut pipeline = pipeline(&latch, &[]);

        pipeline
            .set_mode(MotionMode::Enabled, ModeChangeOrigin::Internal)
            .await
            .unwrap();

        assert_eq!(pipeline.transport().sent().len(), 1);
        assert_eq!(pipeline.transport().sent()[0].id, EVT_MOTION_MODE);
    }

    #[tokio::test]
    async fn test_observer_vetoes_motion_data() {
        let latch = DataReadyLatch::new();
        let mut pipeline = pipeline(&latch, &[sample(100, 0, 0, 0, 0, 0)]).with_observer(
            RecordingObserver {
                veto_data: true,
                ..Default::default()
            },
        );

        latch.raise();
        assert_eq!(pipeline.poll().await, Ok(true));

        // Sample was processed, observer saw it, nothing hit the wire
        assert_eq!(pipeline.stats().samples_processed, 1);
        assert_eq!(pipeline.observer.data_events, 1);
        assert_eq!(pipeline.observer.last_data, [25, 0, 0, 0, 0, 0]);
        assert!(pipeline.transport().sent().is_empty());
        assert_eq!(pipeline.stats().events_vetoed, 1);
    }

    #[tokio::test]
    async fn test_observer_vetoes_mode_change() {
        let latch = DataReadyLatch::new();
        let mut pipeline = pipeline(&latch, &[]).with_observer(RecordingObserver {
            veto_mode: true,
            ..Default::default()
        });

        pipeline
            .set_mode(MotionMode::Enabled, ModeChangeOrigin::Internal)
            .await
            .unwrap();

        assert_eq!(pipeline.observer.mode_events, 1);
        assert!(pipeline.transport().sent().is_empty());
    }

    #[tokio::test]
    async fn test_observer_forward_sends_exactly_one() {
        let latch = DataReadyLatch::new();
        let mut pipeline =
            pipeline(&latch, &[sample(8, 8, 8, 8, 8, 8)]).with_observer(RecordingObserver::default());

        latch.raise();
        pipeline.poll().await.unwrap();

        assert_eq!(pipeline.observer.data_events, 1);
        assert_eq!(pipeline.transport().sent().len(), 1);
        assert_eq!(pipeline.stats().events_sent, 1);
    }

    #[tokio::test]
    async fn test_read_error_propagates_and_consumes_latch() {
        let latch = DataReadyLatch::new();
        let mut pipeline = pipeline(&latch, &[]);
        pipeline.sensor_mut().set_healthy(false);

        latch.raise();
        assert_eq!(
            pipeline.poll().await,
            Err(PipelineError::Sensor(MotionError::Bus))
        );
        assert_eq!(pipeline.stats().read_errors, 1);

        // The failed sample is skipped, not retried
        assert_eq!(pipeline.poll().await, Ok(false));
    }

    #[tokio::test]
    async fn test_interrupt_during_processing_is_kept() {
        let latch = DataReadyLatch::new();
        let mut pipeline = pipeline(&latch, &[]);

        latch.raise();
        pipeline.poll().await.unwrap();

        // Edge that landed while the previous sample was being processed
        latch.raise();
        assert_eq!(pipeline.poll().await, Ok(true));
        assert_eq!(pipeline.stats().samples_processed, 2);
    }

    #[tokio::test]
    async fn test_init_sensor_delegates() {
        let latch = DataReadyLatch::new();
        let mut pipeline = pipeline(&latch, &[]);

        pipeline.init_sensor().await.unwrap();
        assert_eq!(pipeline.sensor().init_count(), 1);
    }
}
