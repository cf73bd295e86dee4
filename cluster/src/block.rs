/// One line or nested block inside a configuration block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigEntry {
    Line(String),
    Block(ConfigBlock),
}

/// A named `name { ... }` block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigBlock {
    pub name: String,
    pub entries: Vec<ConfigEntry>,
}

impl ConfigBlock {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            entries: Vec::new(),
        }
    }

    /// Appends a key/value line.
    pub fn line<S: Into<String>>(mut self, line: S) -> Self {
        self.entries.push(ConfigEntry::Line(line.into()));
        self
    }

    /// Appends a nested block.
    pub fn block(mut self, block: ConfigBlock) -> Self {
        self.entries.push(ConfigEntry::Block(block));
        self
    }

    pub fn push_line<S: Into<String>>(&mut self, line: S) {
        self.entries.push(ConfigEntry::Line(line.into()));
    }

    pub fn push_block(&mut self, block: ConfigBlock) {
        self.entries.push(ConfigEntry::Block(block));
    }

    /// First nested block with the given name.
    pub fn find(&self, name: &str) -> Option<&ConfigBlock> {
        self.blocks().find(|block| block.name == name)
    }

    pub fn blocks(&self) -> impl Iterator<Item = &ConfigBlock> {
        self.entries.iter().filter_map(|entry| match entry {
            ConfigEntry::Block(block) => Some(block),
            ConfigEntry::Line(_) => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|entry| match entry {
            ConfigEntry::Line(line) => Some(line.as_str()),
            ConfigEntry::Block(_) => None,
        })
    }

    pub fn write_into(&self, writer: &mut BlockWriter) {
        writer.open(&self.name);
        for entry in &self.entries {
            match entry {
                ConfigEntry::Line(line) => writer.line(line),
                ConfigEntry::Block(block) => block.write_into(writer),
            }
        }
        writer.close();
    }
}

/// A whole configuration file: leading lines, then top-level blocks.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ConfigDocument {
    pub header: Vec<String>,
    pub blocks: Vec<ConfigBlock>,
}

impl ConfigDocument {
    pub fn find(&self, name: &str) -> Option<&ConfigBlock> {
        self.blocks.iter().find(|block| block.name == name)
    }

    pub fn render(&self) -> String {
        let mut writer = BlockWriter::new();
        for line in &self.header {
            writer.line(line);
        }
        for block in &self.blocks {
            block.write_into(&mut writer);
        }
        writer.finish()
    }
}

/// Indent-tracked text writer, one tab per nesting level.
pub struct BlockWriter {
    output: String,
    depth: usize,
}

impl BlockWriter {
    pub fn new() -> Self {
        Self {
            output: String::new(),
            depth: 0,
        }
    }

    pub fn line(&mut self, line: &str) {
        self.indent();
        self.output.push_str(line);
        self.output.push('\n');
    }

    pub fn open(&mut self, name: &str) {
        self.line(name);
        self.line("{");
        self.depth += 1;
    }

    /// Closes the innermost open block. Extra closes are ignored.
    pub fn close(&mut self) {
        if self.depth == 0 {
            return;
        }
        self.depth -= 1;
        self.line("}");
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Closes any block left open and returns the text.
    pub fn finish(mut self) -> String {
        while self.depth > 0 {
            self.close();
        }
        self.output
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.output.push('\t');
        }
    }
}

impl Default for BlockWriter {
    fn default() -> Self {
        Self::new()
    }
}
