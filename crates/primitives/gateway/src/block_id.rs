use starknet_core::types::Felt;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BlockTag {
    Latest,
    Pending,
}

impl BlockTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockTag::Latest => "latest",
            BlockTag::Pending => "pending",
        }
    }
}

/// Identifies the block a feeder gateway query is evaluated against.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BlockId {
    Hash(Felt),
    Number(u64),
    Tag(BlockTag),
}

impl BlockId {
    /// The query parameter the feeder gateway expects for this block id.
    pub fn to_query_param(&self) -> (&'static str, String) {
        match self {
            BlockId::Hash(hash) => ("blockHash", format!("{hash:#x}")),
            BlockId::Number(number) => ("blockNumber", number.to_string()),
            BlockId::Tag(tag) => ("blockNumber", tag.as_str().to_string()),
        }
    }
}

impl From<BlockTag> for BlockId {
    fn from(tag: BlockTag) -> Self {
        BlockId::Tag(tag)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(
        BlockId::Hash(Felt::from_hex_unchecked("0x47c3637b57c2b079b93c61539950c17e868a28f46cdef28f88521067f21e943")),
        "blockHash",
        "0x47c3637b57c2b079b93c61539950c17e868a28f46cdef28f88521067f21e943"
    )]
    #[case(BlockId::Number(0), "blockNumber", "0")]
    #[case(BlockId::Number(650_123), "blockNumber", "650123")]
    #[case(BlockId::Tag(BlockTag::Latest), "blockNumber", "latest")]
    #[case(BlockId::Tag(BlockTag::Pending), "blockNumber", "pending")]
    fn block_id_query_param(#[case] block_id: BlockId, #[case] key: &str, #[case] value: &str) {
        let (k, v) = block_id.to_query_param();
        assert_eq!(k, key);
        assert_eq!(v, value);
    }
}
