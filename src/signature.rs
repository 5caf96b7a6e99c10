//! Resolução de assinatura de callables.
//!
//! [`Signature`] expõe, para qualquer `FnMut` de aridade 0 a 8, a tupla de
//! argumentos (a chave do cache), o tipo de retorno e a aridade. O chamador
//! nunca declara esses tipos explicitamente: o compilador os deduz a partir
//! da assinatura da closure ou função.

use std::any::type_name;
use std::mem::size_of;

use crate::{MemoError, MemoResult};

/// Assinatura de um callable memoizável.
///
/// `Args` é a tupla de argumentos por valor, p.ex. `(i8, i32)` para
/// `|x: i8, y: i32| ...`.
pub trait Signature<Args> {
    /// Tipo de retorno do callable.
    type Output;

    /// Número de argumentos.
    const ARITY: usize;

    /// Invoca o callable desempacotando a tupla de argumentos.
    fn invoke(&mut self, args: Args) -> Self::Output;
}

macro_rules! impl_signature {
    ($arity:expr; $($ty:ident $arg:ident),*) => {
        impl<Func, Ret, $($ty),*> Signature<($($ty,)*)> for Func
        where
            Func: FnMut($($ty),*) -> Ret,
        {
            type Output = Ret;

            const ARITY: usize = $arity;

            #[inline]
            fn invoke(&mut self, args: ($($ty,)*)) -> Ret {
                let ($($arg,)*) = args;
                (self)($($arg),*)
            }
        }
    };
}

impl_signature!(0;);
impl_signature!(1; A1 a1);
impl_signature!(2; A1 a1, A2 a2);
impl_signature!(3; A1 a1, A2 a2, A3 a3);
impl_signature!(4; A1 a1, A2 a2, A3 a3, A4 a4);
impl_signature!(5; A1 a1, A2 a2, A3 a3, A4 a4, A5 a5);
impl_signature!(6; A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6);
impl_signature!(7; A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7);
impl_signature!(8; A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7, A8 a8);

/// Verifica o contrato de construção de um callable.
///
/// Rejeita callables sem argumentos (nada para usar como chave) e tipos de
/// retorno de tamanho zero, como `()`, que não carregam valor para cachear.
/// Retornos não clonáveis e `&mut T` já são rejeitados pelo limite `Clone`.
pub fn check_signature<F, Args>() -> MemoResult<()>
where
    F: Signature<Args>,
{
    if F::ARITY == 0 {
        return Err(MemoError::UnmemoizableArity {
            type_name: type_name::<F>(),
        });
    }

    if size_of::<F::Output>() == 0 {
        return Err(MemoError::UnmemoizableReturnType {
            type_name: type_name::<F::Output>(),
            reason: "tipo de tamanho zero não carrega valor",
        });
    }

    Ok(())
}
