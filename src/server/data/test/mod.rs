mod many_side;
mod one_side;
