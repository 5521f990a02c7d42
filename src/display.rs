//! Core display operations
//!
//! The [`Display`] struct owns the hardware interface and the panel
//! configuration, tracks the driver lifecycle, and translates pixel
//! operations into the controller's command/data protocol: an addressing
//! window set via CASET/RASET, then a RAMWR burst of RGB565 bytes.

use embedded_hal::delay::DelayNs;
use log::{debug, trace};

use crate::color::Color;
use crate::command::{CASET, NOP, RAMWR, RASET};
use crate::config::Config;
use crate::error::Error;
use crate::interface::DisplayInterface;
use crate::script::{ConfigStep, init_script, validate};

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Driver lifecycle state
///
/// The driver moves strictly forward:
/// `Uninit -> Resetting -> Ready -> ShutDown`, with `Faulted` as a
/// terminal dead end if the transport fails during initialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    /// Constructed, hardware untouched
    Uninit,
    /// Hardware reset performed, init script not yet run
    Resetting,
    /// Init script completed; pixel operations are valid
    Ready,
    /// Transport failed during initialization; terminal
    ///
    /// No retry: the protocol is timing-sensitive and the controller's
    /// state after a partial script is unknown.
    Faulted,
    /// Shut down; terminal
    ShutDown,
}

/// A rectangular pixel region with inclusive bounds
///
/// Transient parameter object created per pixel-write call. Valid windows
/// satisfy `x0 <= x1 < width` and `y0 <= y1 < height`; a single-pixel
/// window (`x0 == x1`, `y0 == y1`) is valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    /// Left column, inclusive
    pub x0: u16,
    /// Top row, inclusive
    pub y0: u16,
    /// Right column, inclusive
    pub x1: u16,
    /// Bottom row, inclusive
    pub y1: u16,
}

impl Window {
    /// Create a new window
    pub fn new(x0: u16, y0: u16, x1: u16, y1: u16) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// The single-pixel window at (x, y)
    pub fn single(x: u16, y: u16) -> Self {
        Self::new(x, y, x, y)
    }

    /// Width in pixels (bounds are inclusive)
    pub fn width(&self) -> u16 {
        self.x1 - self.x0 + 1
    }

    /// Height in pixels (bounds are inclusive)
    pub fn height(&self) -> u16 {
        self.y1 - self.y0 + 1
    }

    /// Number of pixels covered by the window
    pub fn pixel_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }
}

/// Core display driver for ST7735
///
/// Owns the [`DisplayInterface`] exclusively for its whole lifetime; the
/// SPI bus and mode/reset pins must not be shared with another driver
/// instance. All operations are synchronous and blocking, with no
/// suspension points other than the hardware-mandated delays.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Panel configuration
    config: Config,
    /// Lifecycle state
    state: State,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// The driver starts in [`State::Uninit`]; call [`reset`](Self::reset)
    /// and [`initialize`](Self::initialize) before any pixel operation.
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            state: State::Uninit,
        }
    }

    /// Perform hardware reset
    ///
    /// Asserts the RST pin, holds it, releases it, and waits out the
    /// controller's wake-up interval. Transitions to [`State::Resetting`].
    ///
    /// # Errors
    ///
    /// Returns `Error::NotReady` if called after initialization, or
    /// `Error::Interface` if the reset pin fails (the driver is then
    /// [`State::Faulted`]).
    pub fn reset<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        match self.state {
            State::Uninit | State::Resetting => {}
            state => return Err(Error::NotReady { state }),
        }
        if let Err(e) = self.interface.reset(delay) {
            self.state = State::Faulted;
            return Err(Error::Interface(e));
        }
        debug!("hardware reset complete");
        self.state = State::Resetting;
        Ok(())
    }

    /// Run the init script, bringing the controller to a displayable state
    ///
    /// Validates the script structure once, then executes every step in
    /// order to completion. Script execution is not resumable: on a
    /// transport failure the driver transitions to the terminal
    /// [`State::Faulted`] and every subsequent call fails fast with
    /// `Error::NotReady`.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotReady` if [`reset`](Self::reset) has not been
    /// called, `Error::AlreadyInitialized` on a second call, or
    /// `Error::Interface` on transport failure.
    pub fn initialize<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        match self.state {
            State::Resetting => {}
            State::Ready => return Err(Error::AlreadyInitialized),
            state => return Err(Error::NotReady { state }),
        }
        let script = init_script(self.config.color_order.madctl());
        validate(&script)?;
        if let Err(e) = self.run_script(&script, delay) {
            self.state = State::Faulted;
            return Err(e);
        }
        self.state = State::Ready;
        debug!("init script complete, display ready");
        Ok(())
    }

    /// Fill a window with a single color
    ///
    /// # Errors
    ///
    /// Returns `Error::NotReady` outside [`State::Ready`],
    /// `Error::InvalidWindow` for bad coordinates, or `Error::Interface`
    /// on transport failure.
    pub fn set_window_color(&mut self, window: Window, color: Color) -> DisplayResult<I> {
        self.write_pixels(window, core::iter::repeat(color))
    }

    /// Write a single pixel
    ///
    /// Equivalent to a one-pixel [`write_pixels`](Self::write_pixels) burst.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotReady` outside [`State::Ready`],
    /// `Error::InvalidWindow` for out-of-bounds coordinates, or
    /// `Error::Interface` on transport failure.
    pub fn set_pixel(&mut self, x: u16, y: u16, color: Color) -> DisplayResult<I> {
        self.write_pixels(Window::single(x, y), core::iter::once(color))
    }

    /// Stream pixels into a window, row-major
    ///
    /// Sets the addressing window, issues a memory write, then transmits
    /// two big-endian bytes per pixel from the color source, left to right
    /// and top to bottom. The burst is closed with a NOP command. Exactly
    /// `window.pixel_count()` colors are drawn from the source; an
    /// infinite source (e.g. `core::iter::repeat`) is fine.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotReady` outside [`State::Ready`],
    /// `Error::InvalidWindow` for bad coordinates,
    /// `Error::NotEnoughPixels` if the source runs dry, or
    /// `Error::Interface` on transport failure.
    pub fn write_pixels<S>(&mut self, window: Window, colors: S) -> DisplayResult<I>
    where
        S: IntoIterator<Item = Color>,
    {
        if self.state != State::Ready {
            return Err(Error::NotReady { state: self.state });
        }
        self.check_window(window)?;
        self.set_window(window)?;
        self.send_command(RAMWR)?;
        let expected = window.pixel_count();
        let mut colors = colors.into_iter();
        for provided in 0..expected {
            let color = colors
                .next()
                .ok_or(Error::NotEnoughPixels { expected, provided })?;
            self.send_data(&color.to_be_bytes())?;
        }
        // Harmless terminator; the controller ends the burst on any command.
        self.send_command(NOP)?;
        Ok(())
    }

    /// Shut down the driver
    ///
    /// Terminal; every subsequent operation fails with `Error::NotReady`.
    /// Use [`release`](Self::release) afterwards to recover the interface
    /// and hand pin ownership back to the host.
    pub fn shutdown(&mut self) {
        debug!("display shut down");
        self.state = State::ShutDown;
    }

    /// Consume the driver and return the hardware interface
    pub fn release(self) -> I {
        self.interface
    }

    /// Get the driver's lifecycle state
    pub fn state(&self) -> State {
        self.state
    }

    /// Get panel dimensions
    pub fn dimensions(&self) -> &crate::config::Dimensions {
        &self.config.dimensions
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Walk a script strictly in order, once, to completion
    ///
    /// Straight-line interpretation: no branching, no early exit except on
    /// transport failure. Steps after `End` are unreachable.
    fn run_script<D: DelayNs>(&mut self, script: &[ConfigStep], delay: &mut D) -> DisplayResult<I> {
        for step in script {
            match step {
                ConfigStep::Start => {}
                ConfigStep::Command(b) => self.send_command(*b)?,
                ConfigStep::Data(b) => self.send_data(&[*b])?,
                ConfigStep::Delay(ms) => delay.delay_ms(*ms),
                ConfigStep::End => break,
            }
        }
        Ok(())
    }

    /// Validate window coordinates against the panel geometry
    fn check_window(&self, w: Window) -> DisplayResult<I> {
        let dims = self.config.dimensions;
        if w.x0 > w.x1 || w.y0 > w.y1 || w.x1 >= dims.width || w.y1 >= dims.height {
            return Err(Error::InvalidWindow {
                x0: w.x0,
                y0: w.y0,
                x1: w.x1,
                y1: w.y1,
            });
        }
        Ok(())
    }

    /// Set the controller's addressing window
    ///
    /// Emits CASET with the column range and RASET with the row range,
    /// each as two 16-bit big-endian values with the panel calibration
    /// offsets applied.
    fn set_window(&mut self, w: Window) -> DisplayResult<I> {
        trace!(
            "addressing window ({}, {})..({}, {})",
            w.x0,
            w.y0,
            w.x1,
            w.y1
        );
        let xs = (w.x0 + self.config.col_offset).to_be_bytes();
        let xe = (w.x1 + self.config.col_offset).to_be_bytes();
        self.send_command(CASET)?;
        self.send_data(&[xs[0], xs[1], xe[0], xe[1]])?;

        let ys = (w.y0 + self.config.row_offset).to_be_bytes();
        let ye = (w.y1 + self.config.row_offset).to_be_bytes();
        self.send_command(RASET)?;
        self.send_data(&[ys[0], ys[1], ye[0], ye[1]])?;
        Ok(())
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Send data to the display controller
    fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{DISPON, MADCTL, NORON, SLPOUT, SWRESET};
    use crate::config::{Builder, ColorOrder, Dimensions, Variant};
    use crate::interface::BusMode;
    use alloc::vec::Vec;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct MockError;

    #[derive(Debug)]
    struct MockInterface {
        /// Every transferred byte with the framing it was sent under
        events: Vec<(BusMode, u8)>,
        /// Number of hardware resets performed
        resets: u32,
        /// Total byte transfers attempted, including the failing one
        transfers: u32,
        /// Fail the nth transfer (1-based), if set
        fail_on_transfer: Option<u32>,
    }

    impl MockInterface {
        fn new() -> Self {
            Self {
                events: Vec::new(),
                resets: 0,
                transfers: 0,
                fail_on_transfer: None,
            }
        }

        fn transfer(&mut self, mode: BusMode, byte: u8) -> Result<(), MockError> {
            self.transfers += 1;
            if self.fail_on_transfer == Some(self.transfers) {
                return Err(MockError);
            }
            self.events.push((mode, byte));
            Ok(())
        }

        fn commands(&self) -> Vec<u8> {
            self.events
                .iter()
                .filter(|(mode, _)| *mode == BusMode::Command)
                .map(|(_, b)| *b)
                .collect()
        }

        fn data(&self) -> Vec<u8> {
            self.events
                .iter()
                .filter(|(mode, _)| *mode == BusMode::Data)
                .map(|(_, b)| *b)
                .collect()
        }
    }

    impl DisplayInterface for MockInterface {
        type Error = MockError;

        fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
            self.transfer(BusMode::Command, command)
        }

        fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
            for b in data {
                self.transfer(BusMode::Data, *b)?;
            }
            Ok(())
        }

        fn reset<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> {
            self.resets += 1;
            Ok(())
        }
    }

    /// Delay that records total blocked time instead of sleeping
    struct MockDelay {
        total_ns: u64,
    }

    impl MockDelay {
        fn new() -> Self {
            Self { total_ns: 0 }
        }

        fn total_ms(&self) -> u64 {
            self.total_ns / 1_000_000
        }
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += u64::from(ns);
        }
    }

    fn display(width: u16, height: u16) -> Display<MockInterface> {
        let config = Builder::new()
            .dimensions(Dimensions::new(width, height).unwrap())
            .build()
            .unwrap();
        Display::new(MockInterface::new(), config)
    }

    fn ready_display(width: u16, height: u16) -> Display<MockInterface> {
        let mut d = display(width, height);
        let mut delay = MockDelay::new();
        d.reset(&mut delay).unwrap();
        d.initialize(&mut delay).unwrap();
        d.interface.events.clear();
        d
    }

    #[test]
    fn test_new_display_is_uninit() {
        let d = display(128, 160);
        assert_eq!(d.state(), State::Uninit);
    }

    #[test]
    fn test_reset_transitions_to_resetting() {
        let mut d = display(128, 160);
        d.reset(&mut MockDelay::new()).unwrap();
        assert_eq!(d.state(), State::Resetting);
        assert_eq!(d.interface.resets, 1);
    }

    #[test]
    fn test_initialize_without_reset_fails() {
        let mut d = display(128, 160);
        let result = d.initialize(&mut MockDelay::new());
        assert!(matches!(
            result,
            Err(Error::NotReady {
                state: State::Uninit
            })
        ));
        assert!(d.interface.events.is_empty());
    }

    #[test]
    fn test_initialize_transitions_to_ready() {
        let mut d = display(128, 160);
        let mut delay = MockDelay::new();
        d.reset(&mut delay).unwrap();
        d.initialize(&mut delay).unwrap();
        assert_eq!(d.state(), State::Ready);
    }

    #[test]
    fn test_initialize_twice_fails() {
        let mut d = display(128, 160);
        let mut delay = MockDelay::new();
        d.reset(&mut delay).unwrap();
        d.initialize(&mut delay).unwrap();
        assert!(matches!(
            d.initialize(&mut delay),
            Err(Error::AlreadyInitialized)
        ));
    }

    #[test]
    fn test_reset_after_initialize_fails() {
        let mut d = ready_display(128, 160);
        let result = d.reset(&mut MockDelay::new());
        assert!(matches!(
            result,
            Err(Error::NotReady {
                state: State::Ready
            })
        ));
    }

    #[test]
    fn test_initialize_issues_script_steps_in_order() {
        let mut d = display(128, 160);
        let mut delay = MockDelay::new();
        d.reset(&mut delay).unwrap();
        d.initialize(&mut delay).unwrap();

        let script = init_script(d.config().color_order.madctl());
        let mut expected = Vec::new();
        for step in script {
            match step {
                ConfigStep::Command(b) => expected.push((BusMode::Command, b)),
                ConfigStep::Data(b) => expected.push((BusMode::Data, b)),
                _ => {}
            }
        }
        assert_eq!(d.interface.events, expected);

        let commands = d.interface.commands();
        assert_eq!(commands.first(), Some(&SWRESET));
        assert_eq!(commands.get(1), Some(&SLPOUT));
        assert!(commands.contains(&DISPON));
        assert_eq!(commands.last(), Some(&NORON));
    }

    #[test]
    fn test_initialize_blocks_for_script_delays() {
        let mut d = display(128, 160);
        let mut delay = MockDelay::new();
        d.reset(&mut delay).unwrap();
        let after_reset = delay.total_ms();
        d.initialize(&mut delay).unwrap();
        assert_eq!(delay.total_ms() - after_reset, 760);
    }

    #[test]
    fn test_initialize_sends_bgr_madctl_for_bgr_panels() {
        let config = Builder::new()
            .dimensions(Dimensions::new(128, 160).unwrap())
            .color_order(ColorOrder::Bgr)
            .build()
            .unwrap();
        let mut d = Display::new(MockInterface::new(), config);
        let mut delay = MockDelay::new();
        d.reset(&mut delay).unwrap();
        d.initialize(&mut delay).unwrap();

        let madctl_data = d
            .interface
            .events
            .windows(2)
            .find(|pair| pair[0] == (BusMode::Command, MADCTL))
            .map(|pair| pair[1]);
        assert_eq!(madctl_data, Some((BusMode::Data, 0xC8)));
    }

    #[test]
    fn test_set_pixel_wire_sequence() {
        let mut d = ready_display(128, 160);
        d.set_pixel(5, 7, Color::new(0x1234)).unwrap();
        assert_eq!(
            d.interface.events,
            [
                (BusMode::Command, CASET),
                (BusMode::Data, 0x00),
                (BusMode::Data, 5),
                (BusMode::Data, 0x00),
                (BusMode::Data, 5),
                (BusMode::Command, RASET),
                (BusMode::Data, 0x00),
                (BusMode::Data, 7),
                (BusMode::Data, 0x00),
                (BusMode::Data, 7),
                (BusMode::Command, RAMWR),
                (BusMode::Data, 0x12),
                (BusMode::Data, 0x34),
                (BusMode::Command, NOP),
            ]
        );
    }

    #[test]
    fn test_addressing_window_applies_variant_offsets() {
        let config = Builder::new()
            .dimensions(Dimensions::new(128, 160).unwrap())
            .variant(Variant::GreenTab)
            .build()
            .unwrap();
        let mut d = Display::new(MockInterface::new(), config);
        let mut delay = MockDelay::new();
        d.reset(&mut delay).unwrap();
        d.initialize(&mut delay).unwrap();
        d.interface.events.clear();

        d.set_pixel(10, 20, Color::BLACK).unwrap();
        // GreenTab shifts columns by 2 and rows by 1
        assert_eq!(d.interface.data()[..4], [0x00, 12, 0x00, 12]);
        assert_eq!(d.interface.data()[4..8], [0x00, 21, 0x00, 21]);
    }

    #[test]
    fn test_write_pixels_row_major_order() {
        let mut d = ready_display(128, 160);
        let colors = [
            Color::new(0x0001),
            Color::new(0x0002),
            Color::new(0x0003),
            Color::new(0x0004),
        ];
        d.write_pixels(Window::new(0, 0, 1, 1), colors)
            .unwrap();
        let data = d.interface.data();
        // 8 addressing bytes, then (0,0) (1,0) (0,1) (1,1) in order
        assert_eq!(
            data[8..],
            [0x00, 0x01, 0x00, 0x02, 0x00, 0x03, 0x00, 0x04]
        );
    }

    #[test]
    fn test_write_pixels_source_exhausted() {
        let mut d = ready_display(128, 160);
        let colors = [Color::BLACK; 3];
        let result = d.write_pixels(Window::new(0, 0, 1, 1), colors);
        assert!(matches!(
            result,
            Err(Error::NotEnoughPixels {
                expected: 4,
                provided: 3
            })
        ));
    }

    #[test]
    fn test_set_window_color_full_panel() {
        let mut d = ready_display(128, 160);
        d.set_window_color(Window::new(0, 0, 127, 159), Color::BLACK)
            .unwrap();
        let data = d.interface.data();
        // 8 addressing bytes + 128*160*2 pixel bytes
        assert_eq!(data.len(), 8 + 40960);
        assert!(data[8..].iter().all(|b| *b == 0x00));
        assert_eq!(d.interface.commands(), [CASET, RASET, RAMWR, NOP]);
    }

    #[test]
    fn test_single_pixel_window_writes_one_pixel() {
        let mut d = ready_display(128, 160);
        d.set_window_color(Window::single(3, 4), Color::WHITE)
            .unwrap();
        assert_eq!(d.interface.data().len(), 8 + 2);
    }

    #[test]
    fn test_inverted_window_rejected() {
        let mut d = ready_display(128, 160);
        let result = d.set_window_color(Window::new(10, 0, 5, 0), Color::BLACK);
        assert!(matches!(result, Err(Error::InvalidWindow { x0: 10, .. })));
        assert!(d.interface.events.is_empty());
    }

    #[test]
    fn test_out_of_bounds_window_rejected() {
        let mut d = ready_display(128, 160);
        let result = d.set_pixel(128, 0, Color::BLACK);
        assert!(matches!(result, Err(Error::InvalidWindow { x1: 128, .. })));
        let result = d.set_pixel(0, 160, Color::BLACK);
        assert!(matches!(result, Err(Error::InvalidWindow { y1: 160, .. })));
        assert!(d.interface.events.is_empty());
    }

    #[test]
    fn test_pixel_op_before_initialize_touches_no_hardware() {
        let mut d = display(128, 160);
        let result = d.set_pixel(0, 0, Color::BLACK);
        assert!(matches!(
            result,
            Err(Error::NotReady {
                state: State::Uninit
            })
        ));
        assert!(d.interface.events.is_empty());
    }

    #[test]
    fn test_transport_failure_during_initialize_faults() {
        let mut d = display(128, 160);
        let mut delay = MockDelay::new();
        d.reset(&mut delay).unwrap();
        d.interface.fail_on_transfer = Some(5);

        let result = d.initialize(&mut delay);
        assert!(matches!(result, Err(Error::Interface(MockError))));
        assert_eq!(d.state(), State::Faulted);

        // Fail fast without invoking the transport again
        let transfers_after_fault = d.interface.transfers;
        let result = d.set_pixel(0, 0, Color::BLACK);
        assert!(matches!(
            result,
            Err(Error::NotReady {
                state: State::Faulted
            })
        ));
        assert_eq!(d.interface.transfers, transfers_after_fault);

        // And initialization cannot be re-attempted
        assert!(matches!(
            d.initialize(&mut delay),
            Err(Error::NotReady {
                state: State::Faulted
            })
        ));
    }

    #[test]
    fn test_shutdown_is_terminal() {
        let mut d = ready_display(128, 160);
        let mut delay = MockDelay::new();
        d.shutdown();
        assert_eq!(d.state(), State::ShutDown);

        let result = d.set_pixel(0, 0, Color::BLACK);
        assert!(matches!(
            result,
            Err(Error::NotReady {
                state: State::ShutDown
            })
        ));
        assert!(d.interface.events.is_empty());

        let result = d.reset(&mut delay);
        assert!(matches!(
            result,
            Err(Error::NotReady {
                state: State::ShutDown
            })
        ));
    }

    #[test]
    fn test_release_returns_interface() {
        let mut d = ready_display(128, 160);
        d.shutdown();
        let interface = d.release();
        assert_eq!(interface.resets, 1);
    }
}
