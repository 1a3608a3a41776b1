use super::Color;


/// Mixes two premultiplied colors.
///
/// The alphas add up and every channel becomes the alpha-weighted mean of
/// the two inputs. The back color is not attenuated by `1 - front.a`, so
/// the result may carry an alpha above 1.
///
/// Two colors whose alphas sum to zero yield [`Color::TRANSPARENT`].
pub fn mix(front: Color, back: Color) -> Color {
    let a = front.a + back.a;
    if a == 0.0 {
        log::debug!("mix of zero total alpha: {:?} + {:?}", front, back);
        return Color::TRANSPARENT;
    }
    Color {
        a,
        r: (front.a * front.r + back.a * back.r) / a,
        g: (front.a * front.g + back.a * back.g) / a,
        b: (front.a * front.b + back.a * back.b) / a,
    }
}
