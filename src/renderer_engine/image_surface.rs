use image::{Rgba, RgbaImage};
use log::info;
use std::time::Duration;

use crate::renderer_engine::{types::CircleInstance, Surface};
use crate::showcase::HeroGradient;

/// Rastériseur logiciel : dessine les cercles dans une image RGBA.
///
/// Chaque frame repart de la couleur de fond. Les bords des cercles sont
/// anti-aliasés (couverture ≈ distance au bord) et composés en "source-over".
/// Avec `with_gradient`, le fond suit le dégradé animé, une frame valant `frame_period`.
pub struct ImageSurface {
    image: RgbaImage,
    background: Rgba<u8>,
    gradient: Option<HeroGradient>,
    frame_period: Duration,
    frames: u64,
}

impl ImageSurface {
    pub fn new(width: u32, height: u32, background: [u8; 4]) -> Self {
        let background = Rgba(background);
        Self {
            image: RgbaImage::from_pixel(width, height, background),
            background,
            gradient: None,
            frame_period: Duration::ZERO,
            frames: 0,
        }
    }

    pub fn with_gradient(mut self, gradient: HeroGradient, frame_period: Duration) -> Self {
        self.background = Rgba(gradient.rgba8_at(Duration::ZERO));
        self.gradient = Some(gradient);
        self.frame_period = frame_period;
        self
    }

    pub fn background(&self) -> [u8; 4] {
        self.background.0
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// La fenêtre hôte change de taille : nouvelle image, remplie avec le fond.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.image = RgbaImage::from_pixel(width, height, self.background);
    }

    pub fn save_png(&self, path: &str) -> anyhow::Result<()> {
        self.image.save_with_format(path, image::ImageFormat::Png)?;
        info!("🖼️ Frame exported to {}", path);
        Ok(())
    }
}

impl Surface for ImageSurface {
    fn begin_frame(&mut self) {
        if let Some(gradient) = &self.gradient {
            let elapsed = self.frame_period.mul_f64(self.frames as f64);
            self.background = Rgba(gradient.rgba8_at(elapsed));
        }
        self.frames += 1;
        for px in self.image.pixels_mut() {
            *px = self.background;
        }
    }

    fn draw_circle(&mut self, circle: &CircleInstance) {
        let (w, h) = self.image.dimensions();
        let [cx, cy] = circle.center;
        let r = circle.radius;
        let alpha = circle.rgba[3];
        if r <= 0.0 || alpha <= 0.0 || w == 0 || h == 0 {
            return;
        }

        // Boîte englobante, bornée à l'image
        let x0 = (cx - r - 1.0).floor().max(0.0) as u32;
        let y0 = (cy - r - 1.0).floor().max(0.0) as u32;
        let x1 = (cx + r + 1.0).ceil().min(w as f32);
        let y1 = (cy + r + 1.0).ceil().min(h as f32);
        if x1 <= 0.0 || y1 <= 0.0 {
            return;
        }
        let (x1, y1) = (x1 as u32, y1 as u32);

        for y in y0..y1 {
            for x in x0..x1 {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                let coverage = (r + 0.5 - (dx * dx + dy * dy).sqrt()).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    let dst = self.image.get_pixel_mut(x, y);
                    blend_over(dst, circle.rgba, alpha * coverage);
                }
            }
        }
    }
}

fn blend_over(dst: &mut Rgba<u8>, src: [f32; 4], src_a: f32) {
    let dst_a = dst[3] as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);
    if out_a <= 0.0 {
        *dst = Rgba([0, 0, 0, 0]);
        return;
    }
    for i in 0..3 {
        let d = dst[i] as f32 / 255.0;
        let c = (src[i] * src_a + d * dst_a * (1.0 - src_a)) / out_a;
        dst[i] = (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    }
    dst[3] = (out_a.clamp(0.0, 1.0) * 255.0).round() as u8;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_circle_covers_center() {
        let mut surface = ImageSurface::new(20, 20, [0, 0, 0, 255]);
        surface.draw_circle(&CircleInstance {
            center: [10.0, 10.0],
            radius: 4.0,
            rgba: [1.0, 1.0, 1.0, 1.0],
        });
        assert_eq!(surface.image().get_pixel(10, 10), &Rgba([255, 255, 255, 255]));
        assert_eq!(surface.image().get_pixel(0, 0), &Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_translucent_circle_blends_with_background() {
        let mut surface = ImageSurface::new(8, 8, [0, 0, 0, 255]);
        surface.draw_circle(&CircleInstance {
            center: [4.0, 4.0],
            radius: 3.0,
            rgba: [1.0, 1.0, 1.0, 0.5],
        });
        let px = surface.image().get_pixel(4, 4);
        assert!((126..=129).contains(&px[0]), "unexpected blend: {:?}", px);
        assert_eq!(px[3], 255);
    }

    #[test]
    fn test_circle_outside_image_is_ignored() {
        let mut surface = ImageSurface::new(8, 8, [0, 0, 0, 255]);
        surface.draw_circle(&CircleInstance {
            center: [-100.0, -100.0],
            radius: 3.0,
            rgba: [1.0, 1.0, 1.0, 1.0],
        });
        assert!(surface.image().pixels().all(|p| *p == Rgba([0, 0, 0, 255])));
    }

    #[test]
    fn test_begin_frame_clears() {
        let mut surface = ImageSurface::new(8, 8, [1, 2, 3, 255]);
        surface.draw_circle(&CircleInstance {
            center: [4.0, 4.0],
            radius: 3.0,
            rgba: [1.0, 1.0, 1.0, 1.0],
        });
        surface.begin_frame();
        assert!(surface.image().pixels().all(|p| *p == Rgba([1, 2, 3, 255])));
    }

    #[test]
    fn test_gradient_background_follows_time() {
        let gradient = HeroGradient::default();
        let first = gradient.rgba8_at(Duration::ZERO);
        let second = gradient.rgba8_at(Duration::from_millis(6000));
        // une frame = 1 s : la 7e frame (t = 6 s) est sur la deuxième étape
        let mut surface =
            ImageSurface::new(4, 4, [0, 0, 0, 255]).with_gradient(gradient, Duration::from_secs(1));
        surface.begin_frame();
        assert_eq!(surface.background(), first);
        for _ in 0..6 {
            surface.begin_frame();
        }
        assert_eq!(surface.background(), second);
        assert!(surface.image().pixels().all(|p| p.0 == second));
    }
}
