//! Registry of modded blocks served through [`herbalism_core::CustomBlockOracle`].
use std::collections::HashMap;

use herbalism_content::CustomBlockCatalog;
use herbalism_core::{BlockKind, CustomBlockConfig, CustomBlockOracle};

#[derive(Debug, Clone, Default)]
pub struct CustomBlockOracleImpl {
    blocks: HashMap<BlockKind, CustomBlockConfig>,
}

impl CustomBlockOracleImpl {
    pub fn new(catalog: &CustomBlockCatalog) -> Self {
        Self {
            blocks: catalog.configs().collect(),
        }
    }

    pub fn register(&mut self, kind: BlockKind, config: CustomBlockConfig) {
        self.blocks.insert(kind, config);
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl CustomBlockOracle for CustomBlockOracleImpl {
    fn custom_block(&self, kind: BlockKind) -> Option<CustomBlockConfig> {
        self.blocks.get(&kind).copied()
    }
}
