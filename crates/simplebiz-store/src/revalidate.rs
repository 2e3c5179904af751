// SPDX-License-Identifier: Apache-2.0

/// Outbound cache-revalidation seam.
///
/// Callers invoke `notify` after a successful article or page mutation.
/// The call is fire-and-forget: implementations must swallow their own
/// failures, which never affect the already-committed write.
pub trait Revalidator: Send + Sync {
    fn notify(&self, entity_kind: &str, slug: &str);
}

/// Default implementation for tests and deployments without a frontend
/// cache to invalidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRevalidator;

impl Revalidator for NoopRevalidator {
    fn notify(&self, _entity_kind: &str, _slug: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Recording(Mutex<Vec<(String, String)>>);

    impl Revalidator for Recording {
        fn notify(&self, entity_kind: &str, slug: &str) {
            if let Ok(mut calls) = self.0.lock() {
                calls.push((entity_kind.to_string(), slug.to_string()));
            }
        }
    }

    #[test]
    fn revalidator_is_object_safe_and_records_calls() {
        let recording = Recording(Mutex::new(Vec::new()));
        let revalidator: &dyn Revalidator = &recording;
        revalidator.notify("article", "hello-world");
        let calls = recording.0.lock().expect("calls");
        assert_eq!(
            calls.as_slice(),
            [("article".to_string(), "hello-world".to_string())]
        );
    }
}
