use crate::config::CompileOptions;

/// Output buffer for a single compiled page
pub struct CompilerContext<'a> {
    buffer: String,
    depth: usize,
    pub options: &'a CompileOptions,
}

impl<'a> CompilerContext<'a> {
    pub fn new(options: &'a CompileOptions) -> Self {
        Self {
            buffer: String::new(),
            depth: 0,
            options,
        }
    }

    /// Write `text` at the current depth and end the line
    pub fn add_line(&mut self, text: &str) {
        let width = self.options.indent_width * self.depth;
        self.buffer.extend(std::iter::repeat(' ').take(width));
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    /// Saturates at zero
    pub fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn finish(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indentation_follows_options() {
        let options = CompileOptions {
            indent_width: 4,
            ..Default::default()
        };
        let mut ctx = CompilerContext::new(&options);

        ctx.add_line("a");
        ctx.indent();
        ctx.add_line("b");
        ctx.dedent();
        ctx.dedent();
        assert_eq!(ctx.depth(), 0);
        ctx.add_line("c");

        assert_eq!(ctx.finish(), "a\n    b\nc\n");
    }
}
