//! Structural pattern: Adapter
//! Example: plugging a 110V socket into code that expects 220V

use crate::console::Console;
use crate::error::Result;

/// Existing type with an incompatible interface.
pub struct LegacySocket;

impl LegacySocket {
    pub fn plug_110v(&self) -> &'static str {
        "110V socket connected."
    }
}

/// The interface clients expect.
pub trait Socket220V {
    fn plug_220v(&self) -> &'static str;
}

pub struct SocketAdapter {
    legacy: LegacySocket,
}

impl SocketAdapter {
    pub fn new(legacy: LegacySocket) -> Self {
        SocketAdapter { legacy }
    }
}

impl Socket220V for SocketAdapter {
    fn plug_220v(&self) -> &'static str {
        self.legacy.plug_110v()
    }
}

pub fn run(console: &mut Console<'_>) -> Result<()> {
    let socket: Box<dyn Socket220V> = Box::new(SocketAdapter::new(LegacySocket));
    console.line(socket.plug_220v())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapter_forwards_to_legacy() {
        let adapter = SocketAdapter::new(LegacySocket);
        assert_eq!(adapter.plug_220v(), LegacySocket.plug_110v());
    }

    #[test]
    fn test_narration() {
        assert_eq!(Console::capture(run).unwrap(), "110V socket connected.\n");
    }
}
