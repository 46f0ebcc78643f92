/// Darcy 마찰계수를 계산한다. 층류는 64/Re, 난류는 Swamee-Jain 근사를 쓴다.
/// Re=0은 상류의 무유량 단락으로 도달하지 않는다는 전제를 둔다.
pub fn friction_factor(roughness_ft: f64, diameter_ft: f64, reynolds: f64) -> f64 {
    if reynolds <= 2300.0 {
        64.0 / reynolds
    } else {
        let log_term = roughness_ft / (3.7 * diameter_ft) + 5.74 / reynolds.powf(0.9);
        0.25 / log_term.log10().powi(2)
    }
}
