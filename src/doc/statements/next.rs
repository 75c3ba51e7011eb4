/*!
# `NEXT [<variable>][,<variable>...]`
Also see `FOR`

## Purpose
Used to indicate the end of a `FOR` loop.

## Remarks
Without a variable the innermost loop is stepped.
Naming a variable steps that loop, discarding any loops opened
inside it. Naming a variable with no open loop is a `NEXT WITHOUT FOR`.
A bare `NEXT` with no loop open at all is an
`UNEXPECTED END OF PROGRAM`.

## Example
```text
10 FOR X=1 TO 2
20 FOR Y=5 TO 6
30 PRINT X;Y
40 NEXT Y,X
RUN
 1  5
 1  6
 2  5
 2  6
```

*/
