/// QR camera control.
///
/// Decoded payloads come back as `FlowEvent::ScanSucceeded` through the
/// controller's sender.
pub trait ScannerPort: Send {
    fn start(&mut self) {}
    fn stop(&mut self) {}
}

/// Scanner that does nothing; payloads are typed in or passed by URL.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopScanner;

impl ScannerPort for NoopScanner {}
