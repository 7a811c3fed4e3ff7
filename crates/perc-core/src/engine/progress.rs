/// Events emitted while an estimation runs.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    TrialsStart { total: u64 },
    /// One trial finished; `index` is zero-based.
    TrialFinish { index: usize, fraction: f64 },
    TrialsFinish,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    pub fn is_silent(&self) -> bool {
        self.callback.is_none()
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn reporter_without_callback_is_silent() {
        let reporter = ProgressReporter::new();
        assert!(reporter.is_silent());
        reporter.report(Progress::PhaseStart { name: "Silent" });
        reporter.report(Progress::PhaseFinish);
    }

    #[test]
    fn reporter_forwards_events_in_order() {
        let seen = Mutex::new(Vec::new());
        {
            let reporter = ProgressReporter::with_callback(Box::new(|event: Progress| {
                seen.lock().unwrap().push(event);
            }));
            assert!(!reporter.is_silent());
            reporter.report(Progress::TrialsStart { total: 2 });
            reporter.report(Progress::TrialFinish {
                index: 0,
                fraction: 0.5,
            });
            reporter.report(Progress::TrialsFinish);
        }
        assert_eq!(
            seen.into_inner().unwrap(),
            vec![
                Progress::TrialsStart { total: 2 },
                Progress::TrialFinish {
                    index: 0,
                    fraction: 0.5
                },
                Progress::TrialsFinish,
            ]
        );
    }
}
