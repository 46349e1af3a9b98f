use liblife::{Framebuffer, framebuffer::RGBA_BYTES};

/// The RGBA surface handed out for one redraw.
pub struct RenderFrame<'a> {
    pub width: u32,
    pub height: u32,
    pub buffer: &'a mut [u8],
}

impl<'a> RenderFrame<'a> {
    pub fn new(width: u32, height: u32, buffer: &'a mut [u8]) -> Self {
        Self {
            width,
            height,
            buffer,
        }
    }

    /// Copies `framebuffer` onto the surface when their sizes match; anything else leaves the
    /// previous contents untouched.
    pub fn blit(&mut self, framebuffer: &Framebuffer) -> bool {
        let matches = framebuffer.width() == self.width as usize
            && framebuffer.height() == self.height as usize
            && self.buffer.len() == framebuffer.pixels().len() * RGBA_BYTES;

        if matches {
            framebuffer.write_rgba(self.buffer);
        }

        matches
    }
}
