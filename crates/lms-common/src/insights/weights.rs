/// Career readiness composite weights.
pub const READINESS_WEIGHTS: ReadinessWeights = ReadinessWeights {
    engagement: 0.25,
    skill_growth: 0.25,
    career_alignment: 0.30,
    consistency: 0.20,
};

#[derive(Debug, Clone, Copy)]
pub struct ReadinessWeights {
    pub engagement: f64,
    pub skill_growth: f64,
    pub career_alignment: f64,
    pub consistency: f64,
}

impl ReadinessWeights {
    pub fn sum(&self) -> f64 {
        self.engagement + self.skill_growth + self.career_alignment + self.consistency
    }

    pub fn combine(&self, engagement: u32, skill_growth: u32, alignment: u32, consistency: u32) -> u32 {
        let total = f64::from(engagement) * self.engagement
            + f64::from(skill_growth) * self.skill_growth
            + f64::from(alignment) * self.career_alignment
            + f64::from(consistency) * self.consistency;

        total.round().clamp(0.0, 100.0) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        assert!((READINESS_WEIGHTS.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn combine_rounds_weighted_sum() {
        assert_eq!(READINESS_WEIGHTS.combine(80, 60, 100, 50), 75);
        assert_eq!(READINESS_WEIGHTS.combine(100, 100, 100, 100), 100);
        assert_eq!(READINESS_WEIGHTS.combine(0, 0, 0, 0), 0);
        // 12.5 + 0 + 0 + 0 rounds half away from zero.
        assert_eq!(READINESS_WEIGHTS.combine(50, 0, 0, 0), 13);
    }
}
