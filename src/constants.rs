/// 消息结束标记的位模式：连续 15 个 1 后跟一个 0，共 16 bits。
/// 嵌入时追加在消息位流末尾；提取时在累积的位流中搜索该模式，
/// 以确定隐藏消息的结束位置。
pub const TERMINATOR: u16 = 0b1111_1111_1111_1110;

/// 结束标记占用的位数。
pub const TERMINATOR_BITS: usize = 16;

/// 每个像素可隐写的位数。
/// 每个像素有 R、G、B 三个通道，每个通道的最低有效位存储 1 bit，
/// 因此一个像素共可存储 3 bits。
pub const BITS_PER_PIXEL: usize = 3;
