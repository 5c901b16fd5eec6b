/// 单个字符占用的位数。
/// 消息在编码前会被转写为 ASCII，因此每个字符固定为 8 bits，
/// 每个像素字节存储 1 bit，即 8 个字节承载一个字符。
pub const BITS_PER_CHAR: usize = 8;

/// 清除最低有效位的掩码。
/// 编码时先对缓冲区的每个字节执行按位与，将 LSB 归零，
/// 消息之后的零位串正是解码器赖以定位消息结尾的哨兵。
pub const LSB_CLEAR_MASK: u8 = 0xFE;
