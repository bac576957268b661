quantity!(Hours, "h");

impl Hours {
    /// Convert a duration of the integer event clock.
    #[expect(clippy::cast_precision_loss)]
    pub fn from_seconds(seconds: i64) -> Self {
        Self(seconds as f32 / 3600.0)
    }
}
