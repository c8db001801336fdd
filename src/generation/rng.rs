//! Random source selection.
//!
//! The operating system CSPRNG is preferred. If it cannot be read, a
//! ChaCha20 generator is seeded from a BLAKE3 digest of the clock and
//! process id instead. That fallback is predictable to anyone who can
//! guess when the process started, so selecting it is always logged.

use blake3::Hasher;
use rand_chacha::ChaCha20Rng;
use rand_core::{OsRng, RngCore, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Domain separator for fallback seed derivation.
const FALLBACK_DOMAIN: &[u8] = b"phrase-fallback-seed-v1";

/// The random source phrases are drawn from.
///
/// Resolved once at startup by [`RandomSource::detect`] and handed to the
/// phrase generator. Nothing else in the crate holds an RNG.
pub enum RandomSource {
    /// Operating system CSPRNG.
    Secure(OsRng),
    /// Non-secure fallback used when the OS source is unavailable.
    Fallback(ChaCha20Rng),
}

impl RandomSource {
    /// Reads from the OS CSPRNG and selects the best available source.
    pub fn detect() -> Self {
        let mut sample = [0u8; 32];
        Self::select(OsRng.try_fill_bytes(&mut sample))
    }

    /// Picks a source from the outcome of a test read of the OS CSPRNG.
    fn select(os_read: Result<(), rand_core::Error>) -> Self {
        match os_read {
            Ok(()) => {
                tracing::debug!("Using operating system CSPRNG");
                Self::Secure(OsRng)
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "System does not provide a cryptographically secure random number \
                     generator; continuing with a less secure generator"
                );
                Self::fallback()
            }
        }
    }

    /// Creates the non-secure fallback source.
    pub fn fallback() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();

        let mut hasher = Hasher::new();
        hasher.update(FALLBACK_DOMAIN);
        hasher.update(&nanos.to_le_bytes());
        hasher.update(&std::process::id().to_le_bytes());

        Self::Fallback(ChaCha20Rng::from_seed(*hasher.finalize().as_bytes()))
    }

    /// Returns true if backed by the OS CSPRNG.
    pub fn is_secure(&self) -> bool {
        matches!(self, Self::Secure(_))
    }
}

impl RngCore for RandomSource {
    fn next_u32(&mut self) -> u32 {
        match self {
            Self::Secure(rng) => rng.next_u32(),
            Self::Fallback(rng) => rng.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            Self::Secure(rng) => rng.next_u64(),
            Self::Fallback(rng) => rng.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            Self::Secure(rng) => rng.fill_bytes(dest),
            Self::Fallback(rng) => rng.fill_bytes(dest),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        match self {
            Self::Secure(rng) => rng.try_fill_bytes(dest),
            Self::Fallback(rng) => rng.try_fill_bytes(dest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::num::NonZeroU32;
    use std::sync::{Arc, Mutex};

    /// Log sink shared between the subscriber and the test.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    fn os_failure() -> rand_core::Error {
        rand_core::Error::from(NonZeroU32::new(rand_core::Error::CUSTOM_START).unwrap())
    }

    #[test]
    fn test_detect_prefers_os_source() {
        // Every supported test platform exposes an OS CSPRNG.
        assert!(RandomSource::detect().is_secure());
    }

    #[test]
    fn test_os_failure_selects_fallback_with_warning() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();

        let source = tracing::subscriber::with_default(subscriber, || {
            RandomSource::select(Err(os_failure()))
        });

        assert!(!source.is_secure());
        let logs = captured.text();
        assert!(logs.contains("WARN"));
        assert!(logs.contains("continuing with a less secure generator"));
    }

    #[test]
    fn test_os_success_selects_secure() {
        assert!(RandomSource::select(Ok(())).is_secure());
    }

    #[test]
    fn test_fallback_is_not_secure() {
        assert!(!RandomSource::fallback().is_secure());
    }

    #[test]
    fn test_fallback_produces_output() {
        let mut rng = RandomSource::fallback();
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        rng.fill_bytes(&mut a);
        rng.fill_bytes(&mut b);
        assert_ne!(a, b);
    }

    #[test]
    fn test_fallback_seeds_differ_between_instances() {
        let mut first = RandomSource::fallback();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let mut second = RandomSource::fallback();
        assert_ne!(first.next_u64(), second.next_u64());
    }
}
